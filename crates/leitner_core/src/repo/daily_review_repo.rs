//! Daily review ledger store.
//!
//! # Responsibility
//! - Record and query once-per-user-per-day review completion.
//!
//! # Invariants
//! - `insert_if_absent` uses `INSERT OR IGNORE`; the schema's
//!   `UNIQUE(user_id, review_date)` guarantees exactly one row even under
//!   concurrent calls. A duplicate insert is absorbed, never an error.
//! - Rows are never updated or deleted by this subsystem.

use crate::clock::DATE_FORMAT;
use crate::model::daily_review::DailyReviewRecord;
use crate::model::user::UserId;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

/// Store interface for the daily completion ledger.
pub trait DailyReviewStore {
    /// Records completion for the record's `(user_id, review_date)`.
    /// Returns `true` when a new row was written, `false` when the day was
    /// already completed.
    fn insert_if_absent(&self, record: &DailyReviewRecord) -> RepoResult<bool>;

    fn exists(&self, user_id: UserId, date: NaiveDate) -> RepoResult<bool>;

    /// Completed dates within `[start, end]` inclusive, ascending.
    fn completed_dates_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<NaiveDate>>;
}

/// SQLite-backed daily review ledger.
pub struct SqliteDailyReviewStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDailyReviewStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DailyReviewStore for SqliteDailyReviewStore<'_> {
    fn insert_if_absent(&self, record: &DailyReviewRecord) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO daily_reviews (user_id, review_date, completed_at)
             VALUES (?1, ?2, ?3);",
            params![
                record.user_id.to_string(),
                record.review_date.format(DATE_FORMAT).to_string(),
                record.completed_at.timestamp_millis(),
            ],
        )?;
        Ok(inserted > 0)
    }

    fn exists(&self, user_id: UserId, date: NaiveDate) -> RepoResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM daily_reviews WHERE user_id = ?1 AND review_date = ?2
            );",
            params![user_id.to_string(), date.format(DATE_FORMAT).to_string()],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn completed_dates_in_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT review_date FROM daily_reviews
             WHERE user_id = ?1 AND review_date >= ?2 AND review_date <= ?3
             ORDER BY review_date ASC;",
        )?;
        let mut rows = stmt.query(params![
            user_id.to_string(),
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        ])?;

        let mut dates = Vec::new();
        while let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            let date = NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid date `{text}` in daily_reviews.review_date"
                ))
            })?;
            dates.push(date);
        }
        Ok(dates)
    }
}
