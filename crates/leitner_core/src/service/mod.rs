//! Use-case services for the scheduling core.
//!
//! # Responsibility
//! - Orchestrate store and clock calls into the operations the HTTP layer
//!   exposes.
//! - Own the error split the transport maps to 404 vs 500.
//!
//! # See also
//! - `review_service` for the review/completion flow.
//! - `calendar_service` for the month-grid view.

pub mod calendar_service;
pub mod review_service;

use crate::clock::ClockError;
use crate::model::note::NoteId;
use crate::model::user::UserId;
use crate::repo::RepoError;
use crate::schedule::ScheduleError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level error.
///
/// `UserNotFound`/`NoteNotFound` are terminal (404-equivalent, no retry);
/// `Storage` is the generic 500-equivalent and is not retried here.
#[derive(Debug)]
pub enum ServiceError {
    UserNotFound(UserId),
    NoteNotFound(NoteId),
    InvalidCalendarRequest { year: i32, month: u32 },
    InvalidDateOverride(String),
    Storage(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidCalendarRequest { year, month } => {
                write!(f, "invalid calendar request: year={year} month={month}")
            }
            Self::InvalidDateOverride(value) => {
                write!(f, "invalid local date override `{value}`")
            }
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::UserNotFound(id) => Self::UserNotFound(id),
            RepoError::NoteNotFound(id) => Self::NoteNotFound(id),
            other => Self::Storage(other),
        }
    }
}

impl From<ClockError> for ServiceError {
    fn from(value: ClockError) -> Self {
        match value {
            ClockError::BadDateOverride(raw) => Self::InvalidDateOverride(raw),
        }
    }
}

impl From<ScheduleError> for ServiceError {
    fn from(value: ScheduleError) -> Self {
        match value {
            ScheduleError::InvalidMonth { year, month } => {
                Self::InvalidCalendarRequest { year, month }
            }
        }
    }
}
