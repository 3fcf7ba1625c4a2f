//! Due-date scheduling for Leitner boxes.
//!
//! # Responsibility
//! - Decide which boxes open on a given logical date.
//! - Enumerate future due-dates for calendar rendering.
//!
//! # Invariants
//! - All scheduling is derived from `(account_created, box_type,
//!   logical_today)`; nothing here reads a note's own history.
//! - No background wake-up exists; due-ness is computed on demand.

pub mod due;
pub mod pattern;

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// Calendar request with a month outside 1..=12 or a year outside the
    /// supported range.
    InvalidMonth { year: i32, month: u32 },
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month: year={year} month={month}")
            }
        }
    }
}

impl Error for ScheduleError {}
