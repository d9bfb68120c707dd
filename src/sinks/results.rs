use std::path::Path;

use csv::Writer;

use crate::error::{AppError, AppResult, SinkError};
use crate::model::TestOutcome;

pub const RESULTS_HEADER: [&str; 4] = ["TestId", "TestCase", "Result", "Message"];

/// Writes one row per outcome after a fixed header row, replacing the file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_results(path: &Path, outcomes: &[TestOutcome]) -> AppResult<()> {
    let mut writer = Writer::from_path(path).map_err(|err| {
        AppError::sink(SinkError::CreateResults {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let write_err = |err: csv::Error| {
        AppError::sink(SinkError::WriteResults {
            path: path.to_path_buf(),
            source: err,
        })
    };

    writer.write_record(RESULTS_HEADER).map_err(write_err)?;
    for outcome in outcomes {
        let passed = if outcome.passed { "true" } else { "false" };
        writer
            .write_record([
                outcome.id.as_str(),
                outcome.name.as_str(),
                passed,
                outcome.detail.as_str(),
            ])
            .map_err(write_err)?;
    }
    writer.flush().map_err(|err| {
        AppError::sink(SinkError::FlushResults {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    Ok(())
}
