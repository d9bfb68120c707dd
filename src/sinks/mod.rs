//! Result sinks: CSV results, SQLite history, and the HTML report.
mod format;
mod history;
mod report;
mod results;

#[cfg(test)]
mod tests;

pub use history::HistoryStore;
pub use report::{render_report, write_report};
pub use results::{RESULTS_HEADER, write_results};
