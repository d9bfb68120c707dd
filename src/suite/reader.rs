use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, SuiteError};
use crate::model::{AuthScheme, TestCaseRecord};

/// Column layout of a suite file, in order. The first row is a header and is
/// never interpreted.
pub const COLUMNS: [&str; 13] = [
    "TestId",
    "TestCase",
    "Run",
    "Method",
    "URL",
    "Endpoint",
    "Authorization",
    "User",
    "Password",
    "Headers",
    "Body",
    "ExpectedStatusCode",
    "ExpectedResponse",
];

const ID: usize = 0;
const NAME: usize = 1;
const RUN: usize = 2;
const METHOD: usize = 3;
const BASE_URL: usize = 4;
const ENDPOINT: usize = 5;
const AUTH: usize = 6;
const USER: usize = 7;
const PASSWORD: usize = 8;
const HEADERS: usize = 9;
const BODY: usize = 10;
const EXPECTED_STATUS: usize = 11;
const EXPECTED_RESPONSE: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteOptions {
    /// Reject run flags other than `Y`/`N` instead of skipping the row.
    pub strict_run_flags: bool,
}

/// Reads every record from the suite file, enabled or not, in file order.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or parsed, a row is
/// short, or (in strict mode) a run flag is invalid.
pub fn read_test_cases(path: &Path, options: SuiteOptions) -> AppResult<Vec<TestCaseRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| {
            AppError::suite(SuiteError::Open {
                path: path.to_path_buf(),
                source: err,
            })
        })?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| {
            let line = err.position().map_or(0, csv::Position::line);
            AppError::suite(SuiteError::ReadRow {
                path: path.to_path_buf(),
                line,
                source: err,
            })
        })?;
        records.push(parse_row(&row, path, options)?);
    }
    debug!(path = %path.display(), count = records.len(), "Loaded test cases");
    Ok(records)
}

fn parse_row(row: &StringRecord, path: &Path, options: SuiteOptions) -> AppResult<TestCaseRecord> {
    let line = row.position().map_or(0, csv::Position::line);
    if row.len() < COLUMNS.len() {
        return Err(AppError::suite(SuiteError::MissingColumns {
            path: path.to_path_buf(),
            line,
            found: row.len(),
            expected: COLUMNS.len(),
        }));
    }
    let field = |index: usize| row.get(index).unwrap_or_default();

    let id = field(ID);
    let enabled = match parse_run_flag(field(RUN)) {
        Some(enabled) => enabled,
        None if options.strict_run_flags => {
            return Err(AppError::suite(SuiteError::InvalidRunFlag {
                path: path.to_path_buf(),
                line,
                value: field(RUN).to_owned(),
            }));
        }
        None => {
            warn!(
                line,
                id,
                value = field(RUN),
                "Unrecognized run flag; test case will not run"
            );
            false
        }
    };

    Ok(TestCaseRecord {
        id: id.to_owned(),
        name: field(NAME).to_owned(),
        enabled,
        method: field(METHOD).trim().to_owned(),
        base_url: field(BASE_URL).to_owned(),
        endpoint_path: field(ENDPOINT).to_owned(),
        auth_scheme: AuthScheme::from_column(field(AUTH)),
        credential_user: field(USER).to_owned(),
        credential_password: field(PASSWORD).to_owned(),
        extra_headers: field(HEADERS).to_owned(),
        request_body: field(BODY).to_owned(),
        expected_status_code: parse_status(field(EXPECTED_STATUS), line, id),
        expected_response_body: field(EXPECTED_RESPONSE).to_owned(),
    })
}

fn parse_run_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Malformed codes become 0, which no real response matches.
fn parse_status(value: &str, line: u64, id: &str) -> u16 {
    value.trim().parse::<u16>().unwrap_or_else(|err| {
        warn!(line, id, value, error = %err, "Invalid expected status code; using 0");
        0
    })
}
