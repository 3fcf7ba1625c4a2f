//! Review flow use-cases: due queue, answer submission, daily completion.
//!
//! # Responsibility
//! - Compose clock, scheduler and stores into the review endpoints'
//!   semantics.
//!
//! # Invariants
//! - Learned notes never appear in a due-set.
//! - Completing a day twice is a silent no-op; the ledger's uniqueness
//!   constraint carries the idempotency.
//! - The service records explicit completion only; treating "zero notes
//!   due" as completed is the caller's inference.

use crate::clock::{resolve_logical_today, Clock};
use crate::model::daily_review::DailyReviewRecord;
use crate::model::note::{Note, NoteId};
use crate::model::user::{User, UserId};
use crate::repo::daily_review_repo::DailyReviewStore;
use crate::repo::note_repo::NoteStore;
use crate::repo::user_repo::UserStore;
use crate::schedule::due::is_due_on;
use crate::service::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

/// Notes due for review today.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewFeed {
    pub notes: Vec<Note>,
}

/// Number of notes due today.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewCount {
    pub count: usize,
}

/// Acknowledgement for (idempotent) daily completion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompletionAck {
    pub success: bool,
}

/// Completion state for the user's logical today.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReviewStatus {
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    pub date: NaiveDate,
}

/// Use-case service for the review flow.
pub struct ReviewService<U, N, D, C> {
    users: U,
    notes: N,
    daily_reviews: D,
    clock: C,
}

impl<U, N, D, C> ReviewService<U, N, D, C>
where
    U: UserStore,
    N: NoteStore,
    D: DailyReviewStore,
    C: Clock,
{
    pub fn new(users: U, notes: N, daily_reviews: D, clock: C) -> Self {
        Self {
            users,
            notes,
            daily_reviews,
            clock,
        }
    }

    /// Notes whose box type is due on the user's logical today.
    ///
    /// `local_date_override` is a client-supplied `YYYY-MM-DD` that takes
    /// precedence over the computed date.
    pub fn review_queue(
        &self,
        user_id: UserId,
        local_date_override: Option<&str>,
    ) -> ServiceResult<ReviewFeed> {
        let user = self.require_user(user_id)?;
        let today = self.resolve_today(&user, local_date_override)?;
        let account_created = user.account_created_date();

        let notes: Vec<Note> = self
            .notes
            .list_by_user(user_id)?
            .into_iter()
            .filter(|note| is_due_on(note.box_type, account_created, today))
            .collect();

        info!(
            "event=review_queue module=service status=ok user={user_id} date={today} due_notes={}",
            notes.len()
        );
        Ok(ReviewFeed { notes })
    }

    /// Count of notes due on the user's logical today.
    pub fn today_review_count(
        &self,
        user_id: UserId,
        local_date_override: Option<&str>,
    ) -> ServiceResult<ReviewCount> {
        let feed = self.review_queue(user_id, local_date_override)?;
        Ok(ReviewCount {
            count: feed.notes.len(),
        })
    }

    /// Applies one review answer and persists the resulting box atomically.
    ///
    /// Remembered promotes one step along the fixed order; not remembered
    /// holds. `last_reviewed` is stamped either way and never feeds back
    /// into scheduling.
    pub fn submit_review(
        &self,
        user_id: UserId,
        note_id: NoteId,
        remembered: bool,
    ) -> ServiceResult<Note> {
        let mut note = self
            .notes
            .get_note(note_id)?
            .filter(|note| note.user_id == user_id)
            .ok_or(ServiceError::NoteNotFound(note_id))?;

        let reviewed_at = self.clock.now_utc();
        let previous_box = note.box_type;
        note.apply_review(remembered, reviewed_at);
        self.notes
            .update_box_type(note_id, note.box_type, reviewed_at)?;

        info!(
            "event=review_answer module=service status=ok user={user_id} note={note_id} remembered={remembered} box={}->{}",
            previous_box.as_db_str(),
            note.box_type.as_db_str()
        );
        Ok(note)
    }

    /// Records today's session as completed; repeat calls are no-ops.
    pub fn complete_daily_review(
        &self,
        user_id: UserId,
        local_date_override: Option<&str>,
    ) -> ServiceResult<CompletionAck> {
        let user = self.require_user(user_id)?;
        let today = self.resolve_today(&user, local_date_override)?;

        let record = DailyReviewRecord {
            user_id,
            review_date: today,
            completed_at: self.clock.now_utc(),
        };
        let inserted = self.daily_reviews.insert_if_absent(&record)?;
        info!(
            "event=daily_review_complete module=service status=ok user={user_id} date={today} fresh={inserted}"
        );
        Ok(CompletionAck { success: true })
    }

    /// Whether today's session has been explicitly completed.
    pub fn daily_review_status(
        &self,
        user_id: UserId,
        local_date_override: Option<&str>,
    ) -> ServiceResult<DailyReviewStatus> {
        let user = self.require_user(user_id)?;
        let today = self.resolve_today(&user, local_date_override)?;

        let is_completed = self.daily_reviews.exists(user_id, today)?;
        Ok(DailyReviewStatus {
            is_completed,
            date: today,
        })
    }

    fn require_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.users
            .get_user(user_id)?
            .ok_or(ServiceError::UserNotFound(user_id))
    }

    fn resolve_today(
        &self,
        user: &User,
        local_date_override: Option<&str>,
    ) -> ServiceResult<NaiveDate> {
        Ok(resolve_logical_today(
            local_date_override,
            self.clock.now_utc(),
            user.timezone_offset_minutes,
        )?)
    }
}
