use super::{ConfigError, HistoryError, SinkError, SuiteError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for SuiteError {
    fn from(message: &'static str) -> Self {
        SuiteError::TestExpectation { message }
    }
}

impl From<String> for SuiteError {
    fn from(value: String) -> Self {
        SuiteError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for SinkError {
    fn from(message: &'static str) -> Self {
        SinkError::TestExpectation { message }
    }
}

impl From<String> for SinkError {
    fn from(value: String) -> Self {
        SinkError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for HistoryError {
    fn from(message: &'static str) -> Self {
        HistoryError::TestExpectation { message }
    }
}

impl From<String> for HistoryError {
    fn from(value: String) -> Self {
        HistoryError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
