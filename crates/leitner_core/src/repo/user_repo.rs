//! User store contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose the scheduling-relevant user attributes to the core.
//!
//! # Invariants
//! - `created_at` and the timezone offset are written once at creation;
//!   this subsystem never updates them.

use crate::model::user::{User, UserId};
use crate::repo::{parse_epoch_ms, parse_uuid, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Store interface for user scheduling profiles.
pub trait UserStore {
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
}

/// SQLite-backed user store.
pub struct SqliteUserStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserStore for SqliteUserStore<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (id, created_at, timezone_offset_minutes)
             VALUES (?1, ?2, ?3);",
            params![
                user.id.to_string(),
                user.created_at.timestamp_millis(),
                user.timezone_offset_minutes,
            ],
        )?;
        Ok(user.id)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, created_at, timezone_offset_minutes
                 FROM users WHERE id = ?1;",
                params![id.to_string()],
                map_user_row,
            )
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }
}

type ParsedUser = RepoResult<User>;

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<ParsedUser> {
    let id_text: String = row.get("id")?;
    let created_at_ms: i64 = row.get("created_at")?;
    let timezone_offset_minutes: i32 = row.get("timezone_offset_minutes")?;

    Ok(parse_uuid(&id_text, "users.id").and_then(|id| {
        parse_epoch_ms(created_at_ms, "users.created_at").map(|created_at| User {
            id,
            created_at,
            timezone_offset_minutes,
        })
    }))
}
