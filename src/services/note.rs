//! Note service — list and insert.
//!
//! DESIGN
//! ======
//! The service holds no in-memory copy of notes; every operation is a single
//! query against the shared pool, and rows live only for the duration of the
//! request that fetched them.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Newest-first listing is capped at this many rows.
pub const LIST_LIMIT: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A persisted note. Mirrors the `note` table; `id` is store-generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
}

/// Decode target for note creation requests.
#[derive(Debug, Clone, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// List up to [`LIST_LIMIT`] most-recent notes, newest first.
///
/// # Errors
///
/// Returns a database error if the query or row scan fails.
pub async fn list_notes(pool: &PgPool) -> Result<Vec<Note>, NoteError> {
    let rows = sqlx::query_as::<_, (i32, String, String)>(
        "SELECT id, title, content FROM note ORDER BY id DESC LIMIT $1",
    )
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, title, content)| Note { id, title, content })
        .collect())
}

/// Insert a new note; the store generates the id.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_note(pool: &PgPool, note: &NewNote) -> Result<(), NoteError> {
    sqlx::query("INSERT INTO note (title, content) VALUES ($1, $2)")
        .bind(&note.title)
        .bind(&note.content)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "note_test.rs"]
mod tests;
