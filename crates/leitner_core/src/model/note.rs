//! Note domain record and review lifecycle helpers.
//!
//! # Invariants
//! - A note starts in `BoxType::Daily` and terminates in `BoxType::Learned`.
//! - `last_reviewed` is informational only; it never feeds back into
//!   due-date computation for interval boxes.

use crate::model::box_type::BoxType;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Scheduling-relevant slice of a note.
///
/// Content, attachments and tags live outside this subsystem; the core
/// only tracks which box the note sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub user_id: UserId,
    pub box_type: BoxType,
    pub created_at: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates a note in the entry box (`Daily`) with a generated ID.
    pub fn new(user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            box_type: BoxType::Daily,
            created_at,
            last_reviewed: None,
        }
    }

    /// Applies one review answer to this note.
    ///
    /// Remembered promotes one box; not remembered holds. `last_reviewed`
    /// is stamped in both cases.
    pub fn apply_review(&mut self, remembered: bool, reviewed_at: DateTime<Utc>) {
        self.box_type = self.box_type.transition(remembered);
        self.last_reviewed = Some(reviewed_at);
    }

    /// Whether this note still participates in review scheduling.
    pub fn is_in_review_cycle(&self) -> bool {
        !self.box_type.is_terminal()
    }
}
