//! Canonical domain model for the scheduling core.
//!
//! # Responsibility
//! - Define the data structures the scheduling logic operates on.
//! - Keep the box-type transition table in exactly one place.
//!
//! # Invariants
//! - Due-dates for interval boxes depend only on the user's
//!   account-creation date and the box type, never on an individual
//!   note's creation time or review history.

pub mod box_type;
pub mod daily_review;
pub mod note;
pub mod user;
