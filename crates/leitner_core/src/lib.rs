//! Leitner box scheduling core.
//!
//! This crate is the single source of truth for review scheduling: which
//! boxes open on a given logical day, how a note moves between boxes when
//! answered, the projected due-date patterns for the calendar grid, and
//! the idempotent once-per-day completion ledger. HTTP routing, auth,
//! note content and payments live outside and consume this crate through
//! the store traits.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use clock::{
    logical_today, logical_today_at, resolve_logical_today, Clock, ClockError, FixedClock,
    SystemClock, DATE_FORMAT,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::box_type::{BoxType, Cadence, BOX_SEQUENCE};
pub use model::daily_review::DailyReviewRecord;
pub use model::note::{Note, NoteId};
pub use model::user::{User, UserId, DEFAULT_TIMEZONE_OFFSET_MINUTES};
pub use repo::daily_review_repo::{DailyReviewStore, SqliteDailyReviewStore};
pub use repo::note_repo::{NoteStore, SqliteNoteStore};
pub use repo::user_repo::{SqliteUserStore, UserStore};
pub use repo::{RepoError, RepoResult};
pub use schedule::due::{due_box_types, is_due_on};
pub use schedule::pattern::{due_dates_in_range, month_grid, MonthGrid, GRID_CELLS};
pub use schedule::ScheduleError;
pub use service::calendar_service::{CalendarService, CalendarView, PatternEntry};
pub use service::review_service::{
    CompletionAck, DailyReviewStatus, ReviewCount, ReviewFeed, ReviewService,
};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
