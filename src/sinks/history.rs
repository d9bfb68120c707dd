use chrono::{DateTime, SecondsFormat, Utc};
use tokio_rusqlite::Connection;

use crate::error::{AppError, AppResult, HistoryError};
use crate::model::{HistoryEntry, TestOutcome};

type HistoryRow = (String, String, bool, String, String);

/// Append-only store of every outcome ever recorded, backed by SQLite.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Opens (creating if needed) the history database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or initialized.
    pub async fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path).await.map_err(|err| {
            AppError::history(HistoryError::External {
                context: "open sqlite db",
                source: Box::new(err),
            })
        })?;
        conn.call(|conn| {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS test_results (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    test_id TEXT NOT NULL,
                    test_case TEXT NOT NULL,
                    result INTEGER NOT NULL,
                    message TEXT NOT NULL,
                    run_date TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_test_results_run_date ON test_results(run_date);",
            )?;
            Ok(())
        })
        .await
        .map_err(|err| {
            AppError::history(HistoryError::External {
                context: "initialize sqlite db",
                source: Box::new(err),
            })
        })?;
        Ok(Self { conn })
    }

    /// Stores a whole run in one transaction, all rows sharing `run_at`.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction fails; no rows are kept then.
    pub async fn record_all(&self, outcomes: &[TestOutcome], run_at: DateTime<Utc>) -> AppResult<()> {
        if outcomes.is_empty() {
            return Ok(());
        }
        let run_date = format_run_date(run_at);
        let rows: Vec<TestOutcome> = outcomes.to_vec();
        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO test_results (test_id, test_case, result, message, run_date)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                    )?;
                    for outcome in rows {
                        stmt.execute(rusqlite::params![
                            outcome.id,
                            outcome.name,
                            outcome.passed,
                            outcome.detail,
                            run_date
                        ])?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(|err| {
                AppError::history(HistoryError::External {
                    context: "write sqlite history",
                    source: Box::new(err),
                })
            })
    }

    /// Every stored entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails or a stored timestamp is invalid.
    pub async fn all_desc(&self) -> AppResult<Vec<HistoryEntry>> {
        let rows: Vec<HistoryRow> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT test_id, test_case, result, message, run_date
                     FROM test_results
                     ORDER BY run_date DESC, id DESC",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
                    })?
                    .collect::<Result<Vec<HistoryRow>, rusqlite::Error>>()?;
                Ok(rows)
            })
            .await
            .map_err(|err| {
                AppError::history(HistoryError::External {
                    context: "read sqlite history",
                    source: Box::new(err),
                })
            })?;

        rows.into_iter()
            .map(|(id, name, passed, detail, run_date)| {
                Ok(HistoryEntry {
                    id,
                    name,
                    passed,
                    detail,
                    run_at: parse_run_date(&run_date)?,
                })
            })
            .collect()
    }
}

/// Fixed-width UTC timestamps so text order matches time order.
fn format_run_date(run_at: DateTime<Utc>) -> String {
    run_at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_run_date(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| {
            AppError::history(HistoryError::InvalidTimestamp {
                value: value.to_owned(),
                source: err,
            })
        })
}
