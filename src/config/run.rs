use std::path::PathBuf;
use std::time::Duration;

use crate::args::RunnerArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::suite::SuiteOptions;

/// Fully resolved settings for one run, built once after config merge.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub cases_path: PathBuf,
    pub results_path: PathBuf,
    pub report_path: PathBuf,
    pub history_db: Option<String>,
    pub timeout: Duration,
    pub strict_run_flags: bool,
    pub fail_on_failure: bool,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPath`] when an input or output path
    /// was set nowhere.
    pub fn from_args(args: &RunnerArgs) -> AppResult<Self> {
        Ok(Self {
            cases_path: required_path(args.cases.as_deref(), "--cases", "TEST_CASES_FILE")?,
            results_path: required_path(args.results.as_deref(), "--results", "RESULTS_FILE")?,
            report_path: required_path(args.report.as_deref(), "--report", "REPORT_FILE")?,
            history_db: args
                .history_db
                .as_deref()
                .filter(|path| !path.trim().is_empty())
                .map(str::to_owned),
            timeout: args.timeout,
            strict_run_flags: args.strict_run_flags,
            fail_on_failure: args.fail_on_failure,
        })
    }

    #[must_use]
    pub const fn suite_options(&self) -> SuiteOptions {
        SuiteOptions {
            strict_run_flags: self.strict_run_flags,
        }
    }
}

fn required_path(value: Option<&str>, flag: &'static str, env: &'static str) -> AppResult<PathBuf> {
    value
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            tracing::error!("Missing {} (set {} or provide it in the config file).", flag, env);
            AppError::validation(ValidationError::MissingPath { flag, env })
        })
}
