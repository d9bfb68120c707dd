use clap::Parser;
use std::time::Duration;

use super::parsers::parse_duration_arg;

/// Per-request timeout used when neither the CLI nor the config sets one.
pub const DEFAULT_TIMEOUT: &str = "15s";

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Runs declarative HTTP API test cases from a CSV suite and records pass/fail results as CSV, SQLite history, and an HTML report."
)]
pub struct RunnerArgs {
    /// CSV file with the test-case suite
    #[arg(long = "cases", env = "TEST_CASES_FILE")]
    pub cases: Option<String>,

    /// CSV file the per-case results are written to
    #[arg(long = "results", env = "RESULTS_FILE")]
    pub results: Option<String>,

    /// HTML report output path
    #[arg(long = "report", env = "REPORT_FILE")]
    pub report: Option<String>,

    /// SQLite database that keeps the history of every run
    #[arg(long = "history-db", env = "HISTORY_DB")]
    pub history_db: Option<String>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        short = 't',
        default_value = DEFAULT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Treat run flags other than Y/N as a fatal suite error
    #[arg(long = "strict-run-flags")]
    pub strict_run_flags: bool,

    /// Exit with an error when any test case fails
    #[arg(long = "fail-on-failure")]
    pub fail_on_failure: bool,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
