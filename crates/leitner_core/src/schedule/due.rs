//! Due-today predicate for box types.
//!
//! # Invariants
//! - `Daily` is due on every date, `Learned` on none.
//! - An interval box is never due before `account_created + start_offset`;
//!   the early return below keeps negative deltas away from the modulo.

use crate::model::box_type::{BoxType, BOX_SEQUENCE};
use chrono::{Duration, NaiveDate};

/// Whether `box_type` opens for review on `logical_today`.
///
/// The first due date is `account_created + start_offset` days (the
/// creation time-of-day is dropped); after that the box reopens every
/// `interval` days. The pattern is anchored to the account, so every note
/// of this box type shares it.
pub fn is_due_on(box_type: BoxType, account_created: NaiveDate, logical_today: NaiveDate) -> bool {
    let Some(cadence) = box_type.cadence() else {
        // Daily is always due; learned never is.
        return matches!(box_type, BoxType::Daily);
    };

    let first_due = account_created + Duration::days(cadence.start_offset_days);
    if logical_today < first_due {
        return false;
    }

    (logical_today - first_due).num_days() % cadence.interval_days == 0
}

/// All box types due on `logical_today`, in promotion order.
///
/// `Learned` is excluded by construction.
pub fn due_box_types(account_created: NaiveDate, logical_today: NaiveDate) -> Vec<BoxType> {
    BOX_SEQUENCE
        .into_iter()
        .filter(|box_type| is_due_on(*box_type, account_created, logical_today))
        .collect()
}
