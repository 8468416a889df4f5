use async_trait::async_trait;
use goose::metrics::GooseRequestMetric;
use goose::prelude::*;

use super::{AppRequest, Body, Method, Reply, Transport, Verdict};
use crate::config::TargetConfig;
use crate::error::DriverError;

/// Sends requests through a goose user so they show up in the attack's metrics.
///
/// Goose classifies every request by status on its own; [`Transport::record`]
/// replaces that classification for the last request sent, and a recorded
/// failure tag is what shows up in the attack's error summary.
pub struct GooseTransport<'a> {
    user: &'a mut GooseUser,
    target: &'a TargetConfig,
    pending: Option<GooseRequestMetric>,
}

impl<'a> GooseTransport<'a> {
    pub fn new(user: &'a mut GooseUser, target: &'a TargetConfig) -> Self {
        Self {
            user,
            target,
            pending: None,
        }
    }
}

fn goose_error(err: Box<TransactionError>) -> DriverError {
    DriverError::Transport(err.to_string())
}

#[async_trait]
impl<'a> Transport for GooseTransport<'a> {
    async fn send(&mut self, request: AppRequest) -> Result<Reply, DriverError> {
        self.pending = None;

        let method = match request.method {
            Method::Get => GooseMethod::Get,
            Method::Post => GooseMethod::Post,
        };
        let builder = self
            .user
            .get_request_builder(&method, &request.path)
            .map_err(goose_error)?
            .header(
                self.target.test_header.as_str(),
                self.target.test_header_value.as_str(),
            );
        let builder = match &request.body {
            Body::Empty => builder,
            Body::Form(fields) => builder.form(fields),
            Body::Json(value) => builder.json(value),
        };

        let goose_request = GooseRequest::builder()
            .method(method)
            .path(request.path.as_str())
            .name(request.name)
            .set_request_builder(builder)
            .build();
        let goose = self.user.request(goose_request).await.map_err(goose_error)?;

        let response = goose
            .response
            .map_err(|e| DriverError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DriverError::Transport(e.to_string()))?;

        self.pending = Some(goose.request);
        Ok(Reply { status, body })
    }

    fn record(&mut self, verdict: Verdict) {
        let Some(mut metric) = self.pending.take() else {
            return;
        };
        // Goose has already failed non-2xx requests under their status line,
        // and set_failure ignores metrics that are failed. Clear that error and
        // flip the metric back before tagging it.
        if !metric.success {
            metric.error.clear();
            let _ = self.user.set_success(&mut metric);
        }
        // set_failure hands back an Err for the transaction to bubble up; the
        // failure is already in the metrics, so it is dropped here.
        if let Verdict::Failure(tag) = verdict {
            let _ = self.user.set_failure(&tag, &mut metric, None, None);
        }
    }
}
