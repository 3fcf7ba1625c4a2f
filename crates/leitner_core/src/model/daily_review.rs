//! Daily review completion record.
//!
//! # Invariants
//! - At most one record per `(user_id, review_date)` — enforced by the
//!   storage layer's uniqueness constraint, not by application code.
//! - Records are written once and never updated or deleted by this
//!   subsystem.

use crate::model::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One completed review session for one logical day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReviewRecord {
    pub user_id: UserId,
    pub review_date: NaiveDate,
    pub completed_at: DateTime<Utc>,
}
