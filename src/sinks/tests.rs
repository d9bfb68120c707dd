use std::future::Future;

use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;

use super::*;
use crate::error::{AppError, AppResult};
use crate::model::{HistoryEntry, TestOutcome};

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

fn outcomes() -> Vec<TestOutcome> {
    vec![
        TestOutcome::pass("TC01", "health"),
        TestOutcome::fail(
            "TC02",
            "create, user",
            "Response does not match:\nExpected: {\n  \"a\": 1\n}\nObtained: {}".to_owned(),
        ),
    ]
}

#[test]
fn results_file_has_header_and_rows() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("results.csv");
    write_results(&path, &outcomes())?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|err| AppError::sink(format!("reopen failed: {}", err)))?;
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|err| AppError::sink(format!("read failed: {}", err)))?;

    let header: Vec<&str> = rows.first().map(|row| row.iter().collect()).unwrap_or_default();
    if header != RESULTS_HEADER {
        return Err(AppError::sink(format!("Unexpected header: {:?}", header)));
    }
    let failed: Vec<&str> = rows.get(2).map(|row| row.iter().collect()).unwrap_or_default();
    let expected_detail = "Response does not match:\nExpected: {\n  \"a\": 1\n}\nObtained: {}";
    if failed != ["TC02", "create, user", "false", expected_detail] {
        return Err(AppError::sink(format!("Unexpected failed row: {:?}", failed)));
    }
    let passed: Vec<&str> = rows.get(1).map(|row| row.iter().collect()).unwrap_or_default();
    if passed != ["TC01", "health", "true", "Test passed successfully"] {
        return Err(AppError::sink(format!("Unexpected passed row: {:?}", passed)));
    }
    if rows.len() != 3 {
        return Err(AppError::sink(format!("Expected 3 rows, got {}", rows.len())));
    }
    Ok(())
}

#[test]
fn results_file_in_missing_directory_fails() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing").join("results.csv");
    if write_results(&path, &outcomes()).is_ok() {
        return Err(AppError::sink("Expected create failure"));
    }
    Ok(())
}

#[test]
fn history_returns_newest_first() -> AppResult<()> {
    run_async_test(async {
        let dir = tempdir()?;
        let db_path = dir.path().join("history.db");
        let db_path = db_path.to_string_lossy().into_owned();
        let first_run = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).single().ok_or_else(|| {
            AppError::history("Invalid fixture timestamp")
        })?;
        let second_run = first_run + Duration::hours(2);

        let store = HistoryStore::open(&db_path).await?;
        store.record_all(&outcomes(), first_run).await?;
        store
            .record_all(&[TestOutcome::pass("TC03", "late")], second_run)
            .await?;

        let entries = store.all_desc().await?;
        let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
        if ids != ["TC03", "TC02", "TC01"] {
            return Err(AppError::history(format!("Unexpected order: {:?}", ids)));
        }
        match entries.get(1) {
            Some(entry) if !entry.passed && entry.run_at == first_run => {}
            other => {
                return Err(AppError::history(format!("Unexpected entry: {:?}", other)));
            }
        }
        Ok(())
    })
}

#[test]
fn history_persists_across_reopen() -> AppResult<()> {
    run_async_test(async {
        let dir = tempdir()?;
        let db_path = dir.path().join("history.db").to_string_lossy().into_owned();
        let run_at = Utc::now();
        {
            let store = HistoryStore::open(&db_path).await?;
            store.record_all(&outcomes(), run_at).await?;
        }
        let reopened = HistoryStore::open(&db_path).await?;
        let entries = reopened.all_desc().await?;
        if entries.len() != 2 {
            return Err(AppError::history(format!(
                "Expected 2 entries, got {}",
                entries.len()
            )));
        }
        Ok(())
    })
}

#[test]
fn report_escapes_and_counts() -> AppResult<()> {
    let mut cases = outcomes();
    cases.push(TestOutcome::fail(
        "TC<3>",
        "xss",
        "<script>alert('x')</script>".to_owned(),
    ));
    let html = render_report(&cases, None, Utc::now())?;

    if html.contains("<script>alert") {
        return Err(AppError::sink("Detail was not escaped"));
    }
    if !html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;") || !html.contains("TC&lt;3&gt;") {
        return Err(AppError::sink("Escaped text missing"));
    }
    if !html.contains("Total: 3") || !html.contains("Passed: 1") || !html.contains("Failed: 2") {
        return Err(AppError::sink("Summary counts missing"));
    }
    if html.contains("<table id=\"history\">") {
        return Err(AppError::sink("History table rendered without history"));
    }
    if html.matches("status-fail\">Failed</td>").count() != 2 {
        return Err(AppError::sink("Expected two failed cells"));
    }
    Ok(())
}

#[test]
fn report_collapses_long_messages_only() -> AppResult<()> {
    let html = render_report(
        &[
            TestOutcome::fail("A", "short", "short".to_owned()),
            TestOutcome::fail("B", "long", "a message well over the limit".to_owned()),
        ],
        None,
        Utc::now(),
    )?;
    if html.contains("btn-message-0") || !html.contains("btn-message-1") {
        return Err(AppError::sink("Toggle placement is wrong"));
    }
    Ok(())
}

#[test]
fn report_includes_history_when_given() -> AppResult<()> {
    let history = vec![HistoryEntry {
        id: "OLD1".to_owned(),
        name: "previous".to_owned(),
        passed: true,
        detail: "Test passed successfully".to_owned(),
        run_at: Utc::now(),
    }];
    let html = render_report(&outcomes(), Some(&history), Utc::now())?;
    if !html.contains("<table id=\"history\">") || !html.contains("OLD1") {
        return Err(AppError::sink("History table missing"));
    }
    Ok(())
}

#[test]
fn report_is_written_to_disk() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("report.html");
    let html = render_report(&outcomes(), None, Utc::now())?;
    write_report(&path, &html)?;
    let written = std::fs::read_to_string(&path)?;
    if written != html {
        return Err(AppError::sink("Report content differs on disk"));
    }
    Ok(())
}
