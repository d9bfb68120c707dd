use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to open test cases file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read row {line} of '{path}': {source}")]
    ReadRow {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Row {line} of '{path}' has {found} column(s); expected {expected}.")]
    MissingColumns {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },
    #[error("Row {line} of '{path}': invalid run flag '{value}'. Use Y or N.")]
    InvalidRunFlag {
        path: PathBuf,
        line: u64,
        value: String,
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
