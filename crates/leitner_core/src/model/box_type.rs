//! Leitner box taxonomy and transition table.
//!
//! # Responsibility
//! - Define the six box states and their fixed promotion order.
//! - Provide the single table-driven source for review transitions and
//!   interval cadences.
//!
//! # Invariants
//! - The promotion order is total: `daily -> every_2_days -> every_4_days
//!   -> weekly -> every_2_weeks -> learned`.
//! - `learned` is terminal: it never advances and is never scheduled.
//! - Every call site that needs due-ness or promotion goes through this
//!   module; the transition logic exists exactly once.

use serde::{Deserialize, Serialize};

/// Review box a note currently sits in.
///
/// The variant order matters: promotion walks the declaration order one
/// step at a time, ending at `Learned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxType {
    Daily,
    Every2Days,
    Every4Days,
    Weekly,
    Every2Weeks,
    /// Terminal state. Excluded from all due-date computation.
    Learned,
}

/// Fixed review cadence for an interval box.
///
/// `start_offset_days` is measured from the user's account-creation date,
/// not from any individual note. All notes of the same box type share one
/// due-date pattern per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub interval_days: i64,
    pub start_offset_days: i64,
}

/// All box types in promotion order.
pub const BOX_SEQUENCE: [BoxType; 6] = [
    BoxType::Daily,
    BoxType::Every2Days,
    BoxType::Every4Days,
    BoxType::Weekly,
    BoxType::Every2Weeks,
    BoxType::Learned,
];

impl BoxType {
    /// Returns the next box along the promotion order.
    ///
    /// `Learned` maps to itself: the transition is not reachable in normal
    /// operation (learned notes are never in a due-set) but stays defined.
    pub fn next(self) -> Self {
        match self {
            Self::Daily => Self::Every2Days,
            Self::Every2Days => Self::Every4Days,
            Self::Every4Days => Self::Weekly,
            Self::Weekly => Self::Every2Weeks,
            Self::Every2Weeks => Self::Learned,
            Self::Learned => Self::Learned,
        }
    }

    /// Applies one review answer.
    ///
    /// Remembered advances exactly one step; not remembered holds the note
    /// in place. There is no demotion step in this design.
    pub fn transition(self, remembered: bool) -> Self {
        if remembered {
            self.next()
        } else {
            self
        }
    }

    /// Returns the review cadence for interval boxes.
    ///
    /// `Daily` (due every day) and `Learned` (never due) carry no cadence.
    pub fn cadence(self) -> Option<Cadence> {
        let (interval_days, start_offset_days) = match self {
            Self::Daily | Self::Learned => return None,
            Self::Every2Days => (2, 2),
            Self::Every4Days => (4, 4),
            Self::Weekly => (7, 7),
            Self::Every2Weeks => (14, 14),
        };
        Some(Cadence {
            interval_days,
            start_offset_days,
        })
    }

    /// Whether this box has left the review cycle for good.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Learned)
    }

    /// Stable snake_case name used in SQLite and on the wire.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Every2Days => "every_2_days",
            Self::Every4Days => "every_4_days",
            Self::Weekly => "weekly",
            Self::Every2Weeks => "every_2_weeks",
            Self::Learned => "learned",
        }
    }

    /// Parses the stable name back into a box type.
    pub fn parse_db_str(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "every_2_days" => Some(Self::Every2Days),
            "every_4_days" => Some(Self::Every4Days),
            "weekly" => Some(Self::Weekly),
            "every_2_weeks" => Some(Self::Every2Weeks),
            "learned" => Some(Self::Learned),
            _ => None,
        }
    }
}
