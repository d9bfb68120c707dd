use chrono::{DateTime, Utc};

pub const PASSED_DETAIL: &str = "Test passed successfully";

/// Terminal verdict for one executed test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub id: String,
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl TestOutcome {
    #[must_use]
    pub fn pass(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            passed: true,
            detail: PASSED_DETAIL.to_owned(),
        }
    }

    #[must_use]
    pub fn fail(id: &str, name: &str, detail: String) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            passed: false,
            detail,
        }
    }
}

/// A persisted outcome from a previous (or the current) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub name: String,
    pub passed: bool,
    pub detail: String,
    pub run_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<TestOutcome>,
    pub skipped: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total().saturating_sub(self.passed())
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }
}
