//! User scheduling profile.
//!
//! # Responsibility
//! - Carry the two user attributes scheduling depends on: account-creation
//!   instant and timezone offset.
//!
//! # Invariants
//! - `created_at` anchors every interval-box due-date pattern for this user
//!   and is immutable for scheduling purposes after creation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user.
pub type UserId = Uuid;

/// Default timezone offset in minutes (UTC+3).
pub const DEFAULT_TIMEZONE_OFFSET_MINUTES: i32 = 180;

/// Scheduling-relevant slice of a user account.
///
/// Everything else about the account (credentials, profile, subscription)
/// lives outside this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    /// Minutes east of UTC. Applied when computing the user's logical day.
    pub timezone_offset_minutes: i32,
}

impl User {
    /// Creates a user with a generated ID and the default timezone offset.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            timezone_offset_minutes: DEFAULT_TIMEZONE_OFFSET_MINUTES,
        }
    }

    /// Account-creation calendar date, time-of-day dropped.
    ///
    /// This is the anchor every interval-box pattern is derived from.
    pub fn account_created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
