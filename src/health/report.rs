// src/health/report.rs
use super::{messages, Severity};
use serde::Serialize;
use serde_json::Value;

/// What a single endpoint told us, once its body has been understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReport {
    pub severity: Severity,
    pub message: Option<String>,
}

impl EndpointReport {
    /// Parses a status body of the form `{"state": "...", "message": "..."}`.
    ///
    /// Returns `None` unless the body is a JSON object carrying a string
    /// `state`. A `message` that is not a string is ignored.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;
        let state = object.get("state")?.as_str()?;

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Some(Self {
            severity: Severity::from_state(state),
            message,
        })
    }
}

/// Outcome of one check cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
}

impl CheckResult {
    pub fn no_response() -> Self {
        Self {
            severity: Severity::ConnectionProblem,
            message: messages::NO_RESPONSE.to_string(),
        }
    }

    pub fn invalid_response() -> Self {
        Self {
            severity: Severity::ConnectionProblem,
            message: messages::INVALID_RESPONSE.to_string(),
        }
    }

    /// Final result of a cycle in which every endpoint answered.
    /// `details` holds the endpoint messages, each prefixed by a newline.
    pub fn summarize(severity: Severity, details: &str) -> Self {
        Self {
            severity,
            message: format!("{}{}", messages::summary(severity), details),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }
}
