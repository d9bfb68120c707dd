use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write line: {source}")]
    WriteLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to create results file '{path}': {source}")]
    CreateResults {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to write results file '{path}': {source}")]
    WriteResults {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to flush results file '{path}': {source}")]
    FlushResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write report '{path}': {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
