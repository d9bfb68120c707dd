use chrono::Utc;
use tracing::info;

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::executor::Executor;
use crate::http::{ReqwestSender, RequestSender};
use crate::model::RunSummary;
use crate::runner::{run_suite, table_lines};
use crate::sinks::{HistoryStore, render_report, write_report, write_results};
use crate::suite::read_test_cases;

/// Runs the configured suite against live endpoints and writes every sink.
///
/// # Errors
///
/// Returns an error when the suite cannot be read or a sink cannot be
/// written. Failing test cases are not errors here.
pub(crate) async fn run_local(config: &RunConfig) -> AppResult<RunSummary> {
    let sender = ReqwestSender::new(config.timeout)?;
    run_with_sender(config, sender).await
}

pub(crate) async fn run_with_sender<S>(config: &RunConfig, sender: S) -> AppResult<RunSummary>
where
    S: RequestSender,
{
    let records = read_test_cases(&config.cases_path, config.suite_options())?;
    info!(
        path = %config.cases_path.display(),
        count = records.len(),
        "Loaded test cases"
    );

    let executor = Executor::new(sender);
    let summary = run_suite(&executor, &records).await;
    let run_at = Utc::now();

    for line in table_lines(&summary) {
        println!("{}", line);
    }

    write_results(&config.results_path, &summary.outcomes)?;
    info!(path = %config.results_path.display(), "Results written");

    let history = match config.history_db.as_deref() {
        Some(path) => {
            let store = HistoryStore::open(path).await?;
            store.record_all(&summary.outcomes, run_at).await?;
            let entries = store.all_desc().await?;
            info!(path, entries = entries.len(), "History updated");
            Some(entries)
        }
        None => None,
    };

    let html = render_report(&summary.outcomes, history.as_deref(), run_at)?;
    write_report(&config.report_path, &html)?;
    info!(path = %config.report_path.display(), "Report written");

    Ok(summary)
}
