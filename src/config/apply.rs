use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::RunnerArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills in arguments the user did not set explicitly.
///
/// Values given on the command line or through an environment variable win
/// over the config file; clap defaults lose to it.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut RunnerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "cases")
        && let Some(path) = config.cases_file.clone()
    {
        args.cases = Some(path);
    }

    if !is_explicit(matches, "results")
        && let Some(path) = config.results_file.clone()
    {
        args.results = Some(path);
    }

    if !is_explicit(matches, "report")
        && let Some(path) = config.report_file.clone()
    {
        args.report = Some(path);
    }

    if !is_explicit(matches, "history_db")
        && let Some(path) = config.history_db.clone()
    {
        args.history_db = Some(path);
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
    }

    if !is_explicit(matches, "strict_run_flags")
        && let Some(strict) = config.strict_run_flags
    {
        args.strict_run_flags = strict;
    }

    if !is_explicit(matches, "fail_on_failure")
        && let Some(fail) = config.fail_on_failure
    {
        args.fail_on_failure = fail;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
