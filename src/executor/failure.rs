use serde_json::Value;
use thiserror::Error;

use crate::compare::pretty;
use crate::error::RequestError;

/// Why a test case failed. The `Display` text is the outcome detail.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("Error in request: {0}")]
    Request(#[source] RequestError),
    #[error("Incorrect status code: expected {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },
    #[error("Error deserializing expected response: {0}")]
    ExpectedBodyParse(#[source] serde_json::Error),
    #[error("Error deserializing obtained response: {0}")]
    ActualBodyParse(#[source] serde_json::Error),
    #[error(
        "Response does not match:\nExpected: {}\nObtained: {}",
        pretty(.expected),
        pretty(.actual)
    )]
    BodyMismatch {
        expected: Box<Value>,
        actual: Box<Value>,
    },
}

impl Failure {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Failure::Request(RequestError::InvalidMethod { .. }) => "invalid_method",
            Failure::Request(RequestError::HeaderParse { .. }) => "header_parse",
            Failure::Request(_) => "transport",
            Failure::StatusMismatch { .. } => "status_mismatch",
            Failure::ExpectedBodyParse(_) => "expected_body_parse",
            Failure::ActualBodyParse(_) => "actual_body_parse",
            Failure::BodyMismatch { .. } => "body_mismatch",
        }
    }
}
