use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing {flag} (set {env} or provide it in the config file).")]
    MissingPath {
        flag: &'static str,
        env: &'static str,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS, TRACE, or CONNECT.")]
    InvalidHttpMethod { value: String },
    #[error("{failed} of {total} test case(s) failed.")]
    TestsFailed { failed: usize, total: usize },
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
