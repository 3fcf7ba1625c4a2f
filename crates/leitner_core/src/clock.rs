//! Logical calendar-day computation for timezone-offset users.
//!
//! # Responsibility
//! - Convert an instant plus a user's timezone offset into one canonical
//!   calendar date ("logical today").
//! - Route all now() access through an injectable clock.
//!
//! # Invariants
//! - For a fixed `(instant, offset_minutes)` pair the result is identical
//!   no matter what timezone the host process runs in.
//! - An explicit client-supplied local date takes precedence over the
//!   computed one.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire/storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current instant.
///
/// Scheduling logic never calls the system clock directly; tests inject a
/// [`FixedClock`] to pin logical-today deterministically.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug)]
pub enum ClockError {
    /// Client-supplied date override did not parse as `YYYY-MM-DD`.
    BadDateOverride(String),
}

impl Display for ClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadDateOverride(value) => {
                write!(f, "invalid local date override `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for ClockError {}

/// Computes the user's logical calendar date for a UTC instant.
///
/// The instant is already timezone-free; adding the user's offset and
/// truncating to the date yields the same result on any host.
pub fn logical_today(now: DateTime<Utc>, offset_minutes: i32) -> NaiveDate {
    (now + Duration::minutes(i64::from(offset_minutes))).date_naive()
}

/// Computes logical-today from an instant expressed in an arbitrary host
/// timezone.
///
/// The host offset is cancelled by normalizing to UTC first, so two hosts
/// in different timezones observing the same instant agree on the result.
pub fn logical_today_at(instant: DateTime<FixedOffset>, offset_minutes: i32) -> NaiveDate {
    logical_today(instant.with_timezone(&Utc), offset_minutes)
}

/// Resolves logical-today with the explicit-override precedence rule.
///
/// A present `local_date_override` wins over the computed value. A
/// malformed override is rejected rather than silently ignored.
pub fn resolve_logical_today(
    local_date_override: Option<&str>,
    now: DateTime<Utc>,
    offset_minutes: i32,
) -> Result<NaiveDate, ClockError> {
    match local_date_override {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| ClockError::BadDateOverride(raw.to_string())),
        None => Ok(logical_today(now, offset_minutes)),
    }
}
