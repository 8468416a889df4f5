//! # Transport
//!
//! The seam between the simulated user's behavior and whatever actually moves
//! bytes. A caller sends an [`AppRequest`], inspects the [`Reply`], and may
//! then [`record`](Transport::record) a [`Verdict`] that overrides the default
//! status-based classification of that last request.
//!
//! - [`GooseTransport`]: requests go through a goose user and land in the
//!   attack's metrics.
//! - [`HttpTransport`]: plain `reqwest` client with a cookie store, counting
//!   outcomes into [`RunStats`](crate::stats::RunStats).

pub mod attack;
pub mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DriverError;

pub use self::attack::GooseTransport;
pub use self::http::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Form(Vec<(&'static str, String)>),
    Json(serde_json::Value),
}

impl Body {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, DriverError> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }
}

/// One request to the application, with the name its statistics are grouped under.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRequest {
    pub method: Method,
    /// Relative to the target's base URL, without a leading slash.
    pub path: String,
    pub name: &'static str,
    pub body: Body,
}

impl AppRequest {
    pub fn get(name: &'static str, path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            name,
            body: Body::Empty,
        }
    }

    pub fn post(name: &'static str, path: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            name,
            body,
        }
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        match &self.body {
            Body::Form(fields) => fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure(String),
}

impl Verdict {
    /// Success on HTTP 200, otherwise a failure named by `describe`.
    pub fn expect_ok(status: u16, describe: impl FnOnce(u16) -> String) -> Self {
        if status == 200 {
            Verdict::Success
        } else {
            Verdict::Failure(describe(status))
        }
    }

    /// Classification applied when the caller records nothing.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Verdict::Success
        } else {
            Verdict::Failure(format!("HTTP {status}"))
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, request: AppRequest) -> Result<Reply, DriverError>;

    /// Classifies the most recently sent request.
    fn record(&mut self, verdict: Verdict);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, Verdict::Success)]
    #[case(201, Verdict::Failure("boom: 201".to_string()))]
    #[case(404, Verdict::Failure("boom: 404".to_string()))]
    #[case(500, Verdict::Failure("boom: 500".to_string()))]
    fn test_expect_ok(#[case] status: u16, #[case] expected: Verdict) {
        assert_eq!(Verdict::expect_ok(status, |s| format!("boom: {s}")), expected);
    }

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(302, false)]
    #[case(401, false)]
    fn test_default_classification(#[case] status: u16, #[case] success: bool) {
        assert_eq!(Verdict::from_status(status) == Verdict::Success, success);
    }

    #[test]
    fn test_form_value_lookup() {
        let request = AppRequest::post(
            "/login",
            "login",
            Body::Form(vec![("email", "a@b.c".to_string())]),
        );
        assert_eq!(request.form_value("email"), Some("a@b.c"));
        assert_eq!(request.form_value("password"), None);
        assert_eq!(AppRequest::get("/logout", "logout").form_value("email"), None);
    }
}
