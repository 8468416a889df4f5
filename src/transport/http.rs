use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Url;

use super::{AppRequest, Body, Method, Reply, Transport, Verdict};
use crate::config::TargetConfig;
use crate::error::DriverError;
use crate::stats::RunStats;

/// Standalone `reqwest` transport. Keeps the session cookie between requests
/// and counts outcomes locally.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    stats: RunStats,
    pending: Option<(&'static str, Verdict)>,
}

impl HttpTransport {
    pub fn new(target: &TargetConfig) -> Result<Self, DriverError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("javatheque-load/0.1"),
        );
        headers.insert(
            HeaderName::from_bytes(target.test_header.as_bytes())
                .map_err(|e| DriverError::Transport(e.to_string()))?,
            HeaderValue::from_str(&target.test_header_value)
                .map_err(|e| DriverError::Transport(e.to_string()))?,
        );
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: target.base_url()?,
            stats: RunStats::default(),
            pending: None,
        })
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Stats including the last request's classification.
    pub fn into_stats(mut self) -> RunStats {
        self.flush();
        self.stats
    }

    fn flush(&mut self) {
        if let Some((name, verdict)) = self.pending.take() {
            self.stats.record(name, &verdict);
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&mut self, request: AppRequest) -> Result<Reply, DriverError> {
        self.flush();

        let url = self.base_url.join(&request.path)?;
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let builder = match &request.body {
            Body::Empty => builder,
            Body::Form(fields) => builder.form(fields),
            Body::Json(value) => builder.json(value),
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                self.stats.record(request.name, &Verdict::Failure(e.to_string()));
                return Err(e.into());
            }
        };
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                self.stats.record(request.name, &Verdict::Failure(e.to_string()));
                return Err(e.into());
            }
        };

        self.pending = Some((request.name, Verdict::from_status(status)));
        Ok(Reply { status, body })
    }

    fn record(&mut self, verdict: Verdict) {
        if let Some((_, pending)) = self.pending.as_mut() {
            *pending = verdict;
        }
    }
}
