use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::run_local;
use crate::args::RunnerArgs;
use crate::config::{DEFAULT_CONFIG_FILES, RunConfig};
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    apply_config(&mut args, &matches)?;
    let config = RunConfig::from_args(&args)?;

    // One request at a time; the suite may depend on server-side state.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(run_local(&config))?;
    if config.fail_on_failure && !summary.all_passed() {
        return Err(AppError::validation(ValidationError::TestsFailed {
            failed: summary.failed(),
            total: summary.total(),
        }));
    }
    Ok(())
}

fn parse_args() -> AppResult<Option<(RunnerArgs, ArgMatches)>> {
    let mut cmd = RunnerArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = RunnerArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config() && !has_env_suite()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn has_env_suite() -> bool {
    std::env::var_os("TEST_CASES_FILE").is_some()
}

fn apply_config(args: &mut RunnerArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}
