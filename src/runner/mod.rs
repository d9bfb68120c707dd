//! Sequential run coordinator.
//!
//! Cases may share backend state, so each request completes before the
//! next one starts. A failing case never stops the run.
mod console;


use tracing::{debug, info, warn};

use crate::executor::Executor;
use crate::http::RequestSender;
use crate::model::{RunSummary, TestCaseRecord};

pub use console::table_lines;

/// Executes every enabled record in order and collects one outcome each.
pub async fn run_suite<S>(executor: &Executor<S>, records: &[TestCaseRecord]) -> RunSummary
where
    S: RequestSender,
{
    let mut summary = RunSummary::default();
    for record in records {
        if !record.enabled {
            debug!(id = %record.id, "Skipping disabled test case");
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        }

        info!(id = %record.id, name = %record.name, method = %record.method, "Running test case");
        let outcome = executor.execute(record).await;
        if outcome.passed {
            info!(id = %outcome.id, "Test case passed");
        } else {
            warn!(id = %outcome.id, detail = %outcome.detail, "Test case failed");
        }
        summary.outcomes.push(outcome);
    }
    summary
}
