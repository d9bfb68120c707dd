//! Declarative test-case records and their outcomes.
mod outcome;
mod record;


pub use outcome::{HistoryEntry, PASSED_DETAIL, RunSummary, TestOutcome};
pub use record::{AuthScheme, HttpMethod, TestCaseRecord};
