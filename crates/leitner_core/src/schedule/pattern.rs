//! Due-date pattern enumeration and the fixed calendar grid.
//!
//! # Responsibility
//! - Project an interval box's future due-dates over an arbitrary range.
//! - Compute the 42-cell (6-week) month grid the calendar UI renders.
//!
//! # Invariants
//! - Patterns are per box type, not per note: one sequence serves every
//!   note of that type for the user.
//! - `Daily` and `Learned` produce no pattern dates by contract.

use crate::model::box_type::BoxType;
use crate::schedule::ScheduleError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of cells in the fixed month grid (6 weeks).
pub const GRID_CELLS: i64 = 42;

const MIN_GRID_YEAR: i32 = 1970;
const MAX_GRID_YEAR: i32 = 9999;

/// Fixed 6-week window shown for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    /// Monday on or before the 1st of the requested month.
    pub start: NaiveDate,
    /// `start + 41` days; the grid covers `[start, end]` inclusive.
    pub end: NaiveDate,
}

impl MonthGrid {
    /// Iterates every cell date in display order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.start;
        (0..GRID_CELLS).map(move |offset| start + Duration::days(offset))
    }
}

/// All due-dates for `box_type` within `[range_start, range_end]` inclusive.
///
/// The sequence is `first_due, first_due+interval, ...` clipped to the
/// range. Empty when the box carries no cadence or the range lies entirely
/// before the first due date.
pub fn due_dates_in_range(
    box_type: BoxType,
    account_created: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<NaiveDate> {
    let Some(cadence) = box_type.cadence() else {
        return Vec::new();
    };
    if range_end < range_start {
        return Vec::new();
    }

    let first_due = account_created + Duration::days(cadence.start_offset_days);

    // Jump straight to the first occurrence inside the range instead of
    // stepping from first_due.
    let mut current = if range_start <= first_due {
        first_due
    } else {
        let gap = (range_start - first_due).num_days();
        let steps = (gap + cadence.interval_days - 1) / cadence.interval_days;
        first_due + Duration::days(steps * cadence.interval_days)
    };

    let mut dates = Vec::new();
    while current <= range_end {
        dates.push(current);
        current += Duration::days(cadence.interval_days);
    }
    dates
}

/// Computes the fixed 42-cell grid for `(year, month)`.
///
/// Grid start is the Monday on or before the 1st of the month; grid end is
/// start + 41 days. Out-of-range input is rejected rather than clamped,
/// so the caller never receives a grid for a different month than asked.
pub fn month_grid(year: i32, month: u32) -> Result<MonthGrid, ScheduleError> {
    if !(MIN_GRID_YEAR..=MAX_GRID_YEAR).contains(&year) {
        return Err(ScheduleError::InvalidMonth { year, month });
    }
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ScheduleError::InvalidMonth { year, month })?;

    let days_since_monday = first_of_month.weekday().num_days_from_monday();
    let start = first_of_month - Duration::days(i64::from(days_since_monday));
    let end = start + Duration::days(GRID_CELLS - 1);

    debug_assert_eq!(start.weekday(), Weekday::Mon);
    Ok(MonthGrid { start, end })
}

#[cfg(test)]
mod tests {
    use super::{due_dates_in_range, month_grid, GRID_CELLS};
    use crate::model::box_type::BoxType;
    use crate::schedule::ScheduleError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_pattern_over_january() {
        let dates = due_dates_in_range(
            BoxType::Weekly,
            date(2024, 1, 1),
            date(2024, 1, 1),
            date(2024, 2, 1),
        );
        assert_eq!(
            dates,
            vec![date(2024, 1, 8), date(2024, 1, 15), date(2024, 1, 22), date(2024, 1, 29)]
        );
    }

    #[test]
    fn range_starting_mid_pattern_aligns_to_the_cadence() {
        // first_due = Jan 5; range opens at Jan 10 so the first hit is Jan 13.
        let dates = due_dates_in_range(
            BoxType::Every4Days,
            date(2024, 1, 1),
            date(2024, 1, 10),
            date(2024, 1, 21),
        );
        assert_eq!(dates, vec![date(2024, 1, 13), date(2024, 1, 17), date(2024, 1, 21)]);
    }

    #[test]
    fn daily_and_learned_have_no_pattern() {
        for box_type in [BoxType::Daily, BoxType::Learned] {
            let dates =
                due_dates_in_range(box_type, date(2024, 1, 1), date(2024, 1, 1), date(2024, 12, 31));
            assert!(dates.is_empty());
        }
    }

    #[test]
    fn range_entirely_before_first_due_is_empty() {
        let dates = due_dates_in_range(
            BoxType::Every2Weeks,
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 14),
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn march_2024_grid_is_the_documented_window() {
        let grid = month_grid(2024, 3).unwrap();
        assert_eq!(grid.start, date(2024, 2, 26));
        // 42 inclusive cells from Feb 26 land on Apr 7 (leap February).
        assert_eq!(grid.end, date(2024, 4, 7));
        assert_eq!(grid.days().count() as i64, GRID_CELLS);
        assert_eq!(grid.days().last(), Some(grid.end));
    }

    #[test]
    fn month_starting_on_monday_keeps_its_own_first_day() {
        // 2024-01-01 and 2024-04-01 are Mondays.
        assert_eq!(month_grid(2024, 1).unwrap().start, date(2024, 1, 1));
        assert_eq!(month_grid(2024, 4).unwrap().start, date(2024, 4, 1));
    }

    #[test]
    fn invalid_month_and_year_are_rejected() {
        assert_eq!(
            month_grid(2024, 13).unwrap_err(),
            ScheduleError::InvalidMonth { year: 2024, month: 13 }
        );
        assert_eq!(
            month_grid(2024, 0).unwrap_err(),
            ScheduleError::InvalidMonth { year: 2024, month: 0 }
        );
        assert!(month_grid(1969, 6).is_err());
        assert!(month_grid(10_000, 6).is_err());
    }
}
