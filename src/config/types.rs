use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration;
use crate::error::ValidationError;

/// Optional settings file. Every field may be overridden from the CLI or
/// its environment variable.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub cases_file: Option<String>,
    pub results_file: Option<String>,
    pub report_file: Option<String>,
    pub history_db: Option<String>,
    pub timeout: Option<DurationValue>,
    pub strict_run_flags: Option<bool>,
    pub fail_on_failure: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
