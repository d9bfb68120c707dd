//! Turns one test-case record into a request and a pass/fail verdict.
//!
//! Checks run in a fixed order and the first failure is terminal:
//! request errors, then the status code, then (only when an expected body
//! is given) the JSON body. A status mismatch therefore hides any body
//! mismatch.
mod failure;


use tracing::debug;

use crate::compare::{first_difference, parse_body, structurally_equal};
use crate::http::{OutboundRequest, RequestSender};
use crate::model::{TestCaseRecord, TestOutcome};

pub use failure::Failure;

pub struct Executor<S> {
    sender: S,
}

impl<S> Executor<S>
where
    S: RequestSender,
{
    #[must_use]
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }

    /// Executes a record and folds any failure into the outcome detail.
    pub async fn execute(&self, record: &TestCaseRecord) -> TestOutcome {
        match self.evaluate(record).await {
            Ok(()) => TestOutcome::pass(&record.id, &record.name),
            Err(failure) => {
                debug!(id = %record.id, kind = failure.kind(), "Test case failed");
                TestOutcome::fail(&record.id, &record.name, failure.to_string())
            }
        }
    }

    /// Executes a record and returns the first failing check, if any.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] that decided the verdict.
    pub async fn evaluate(&self, record: &TestCaseRecord) -> Result<(), Failure> {
        let url = record.full_url();
        let response = self
            .sender
            .send(OutboundRequest::for_record(record, &url))
            .await
            .map_err(|err| {
                if let Some(status) = err.status() {
                    debug!(id = %record.id, status, "Response arrived but its body was unreadable");
                }
                Failure::Request(err)
            })?;

        check_status(record.expected_status_code, response.status)?;

        if record.checks_body() {
            check_body(&record.expected_response_body, &response.body)?;
        }
        Ok(())
    }
}

/// # Errors
///
/// Returns [`Failure::StatusMismatch`] when the codes differ.
pub fn check_status(expected: u16, actual: u16) -> Result<(), Failure> {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::StatusMismatch { expected, actual })
    }
}

/// Compares an expected body against the obtained one.
///
/// The expected side is decoded first, so a malformed test definition is
/// reported even when the live response is malformed too.
///
/// # Errors
///
/// Returns a parse failure for either side, or [`Failure::BodyMismatch`].
pub fn check_body(expected_text: &str, actual_text: &str) -> Result<(), Failure> {
    let expected = parse_body(expected_text).map_err(Failure::ExpectedBodyParse)?;
    let actual = parse_body(actual_text).map_err(Failure::ActualBodyParse)?;

    if structurally_equal(&expected, &actual) {
        return Ok(());
    }
    if let Some(path) = first_difference(&expected, &actual) {
        debug!(path = %path, "Response body differs");
    }
    Err(Failure::BodyMismatch {
        expected: Box::new(expected),
        actual: Box::new(actual),
    })
}
