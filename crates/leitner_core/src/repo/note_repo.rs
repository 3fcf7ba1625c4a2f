//! Note store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the note reads the due-set computation needs and the single
//!   atomic box-type update the review flow performs.
//!
//! # Invariants
//! - `update_box_type` is one `UPDATE` statement; there is no
//!   read-modify-write window inside the store.
//! - Read paths reject unknown `box_type` values instead of masking them.

use crate::model::box_type::BoxType;
use crate::model::note::{Note, NoteId};
use crate::model::user::UserId;
use crate::repo::{parse_epoch_ms, parse_uuid, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const NOTE_SELECT_SQL: &str = "SELECT id, user_id, box_type, created_at, last_reviewed FROM notes";

/// Store interface for note scheduling state.
pub trait NoteStore {
    fn create_note(&self, note: &Note) -> RepoResult<NoteId>;
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists all notes for a user, learned ones included; filtering by
    /// due-ness is the service's concern.
    fn list_by_user(&self, user_id: UserId) -> RepoResult<Vec<Note>>;
    /// Atomically moves a note to `new_box` and stamps `last_reviewed`.
    fn update_box_type(
        &self,
        id: NoteId,
        new_box: BoxType,
        reviewed_at: DateTime<Utc>,
    ) -> RepoResult<()>;
}

/// SQLite-backed note store.
pub struct SqliteNoteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteStore for SqliteNoteStore<'_> {
    fn create_note(&self, note: &Note) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (id, user_id, box_type, created_at, last_reviewed)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                note.id.to_string(),
                note.user_id.to_string(),
                note.box_type.as_db_str(),
                note.created_at.timestamp_millis(),
                note.last_reviewed.map(|at| at.timestamp_millis()),
            ],
        )?;
        Ok(note.id)
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                &format!("{NOTE_SELECT_SQL} WHERE id = ?1;"),
                params![id.to_string()],
                map_note_row,
            )
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }

    fn list_by_user(&self, user_id: UserId) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE user_id = ?1 ORDER BY created_at ASC, id ASC;"))?;
        let mut rows = stmt.query(params![user_id.to_string()])?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(map_note_row(row)??);
        }
        Ok(notes)
    }

    fn update_box_type(
        &self,
        id: NoteId,
        new_box: BoxType,
        reviewed_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes SET box_type = ?1, last_reviewed = ?2 WHERE id = ?3;",
            params![
                new_box.as_db_str(),
                reviewed_at.timestamp_millis(),
                id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NoteNotFound(id));
        }
        Ok(())
    }
}

type ParsedNote = RepoResult<Note>;

fn map_note_row(row: &Row<'_>) -> rusqlite::Result<ParsedNote> {
    let id_text: String = row.get("id")?;
    let user_id_text: String = row.get("user_id")?;
    let box_type_text: String = row.get("box_type")?;
    let created_at_ms: i64 = row.get("created_at")?;
    let last_reviewed_ms: Option<i64> = row.get("last_reviewed")?;

    Ok(parse_note_fields(
        &id_text,
        &user_id_text,
        &box_type_text,
        created_at_ms,
        last_reviewed_ms,
    ))
}

fn parse_note_fields(
    id_text: &str,
    user_id_text: &str,
    box_type_text: &str,
    created_at_ms: i64,
    last_reviewed_ms: Option<i64>,
) -> ParsedNote {
    let id = parse_uuid(id_text, "notes.id")?;
    let user_id = parse_uuid(user_id_text, "notes.user_id")?;
    let box_type = BoxType::parse_db_str(box_type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid box type `{box_type_text}` in notes.box_type"))
    })?;
    let created_at = parse_epoch_ms(created_at_ms, "notes.created_at")?;
    let last_reviewed = match last_reviewed_ms {
        Some(ms) => Some(parse_epoch_ms(ms, "notes.last_reviewed")?),
        None => None,
    };

    Ok(Note {
        id,
        user_id,
        box_type,
        created_at,
        last_reviewed,
    })
}
