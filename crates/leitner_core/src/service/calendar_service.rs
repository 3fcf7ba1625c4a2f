//! Month-grid calendar view.
//!
//! # Responsibility
//! - Assemble the 42-cell calendar payload: box-opening pattern dates and
//!   completed-day markers.
//!
//! # Invariants
//! - Pattern entries are per box type, not per note; a box type
//!   contributes entries only while the user has at least one note in it.
//! - `daily` and `learned` never contribute pattern entries.

use crate::model::box_type::{BoxType, BOX_SEQUENCE};
use crate::model::user::{User, UserId};
use crate::repo::daily_review_repo::DailyReviewStore;
use crate::repo::note_repo::NoteStore;
use crate::repo::user_repo::UserStore;
use crate::schedule::pattern::{due_dates_in_range, month_grid};
use crate::service::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::collections::HashSet;

/// One box-opening date inside the requested grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub box_type: BoxType,
    pub review_date: NaiveDate,
    /// Always `true`; marks the entry as a projected pattern date rather
    /// than a per-note record.
    pub is_pattern: bool,
}

/// Payload for the month calendar endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub notes: Vec<PatternEntry>,
    #[serde(rename = "completedDays")]
    pub completed_days: Vec<NaiveDate>,
    #[serde(rename = "userCreatedAt")]
    pub user_created_at: NaiveDate,
    #[serde(rename = "userTimezoneOffset")]
    pub user_timezone_offset: i32,
    pub month: u32,
    pub year: i32,
}

/// Use-case service for the calendar view.
pub struct CalendarService<U, N, D> {
    users: U,
    notes: N,
    daily_reviews: D,
}

impl<U, N, D> CalendarService<U, N, D>
where
    U: UserStore,
    N: NoteStore,
    D: DailyReviewStore,
{
    pub fn new(users: U, notes: N, daily_reviews: D) -> Self {
        Self {
            users,
            notes,
            daily_reviews,
        }
    }

    /// Builds the fixed 6-week view for `(year, month)`.
    ///
    /// Rejects out-of-range year/month instead of clamping.
    pub fn month_view(&self, user_id: UserId, year: i32, month: u32) -> ServiceResult<CalendarView> {
        let user = self.require_user(user_id)?;
        let grid = month_grid(year, month)?;
        let account_created = user.account_created_date();

        let populated_boxes: HashSet<BoxType> = self
            .notes
            .list_by_user(user_id)?
            .into_iter()
            .map(|note| note.box_type)
            .collect();

        let mut entries = Vec::new();
        for box_type in BOX_SEQUENCE {
            if !populated_boxes.contains(&box_type) {
                continue;
            }
            // due_dates_in_range is empty for daily/learned by contract.
            for review_date in
                due_dates_in_range(box_type, account_created, grid.start, grid.end)
            {
                entries.push(PatternEntry {
                    box_type,
                    review_date,
                    is_pattern: true,
                });
            }
        }

        let completed_days =
            self.daily_reviews
                .completed_dates_in_range(user_id, grid.start, grid.end)?;

        info!(
            "event=calendar_view module=service status=ok user={user_id} year={year} month={month} pattern_entries={} completed_days={}",
            entries.len(),
            completed_days.len()
        );

        Ok(CalendarView {
            notes: entries,
            completed_days,
            user_created_at: account_created,
            user_timezone_offset: user.timezone_offset_minutes,
            month,
            year,
        })
    }

    fn require_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.users
            .get_user(user_id)?
            .ok_or(ServiceError::UserNotFound(user_id))
    }
}
