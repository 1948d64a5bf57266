//! Notes resource routes.
//!
//! ERROR HANDLING
//! ==============
//! Every database or decode failure is converted to an HTTP response here,
//! with the underlying error text in the body; nothing crosses the request
//! boundary. The POST body is decoded by hand so a malformed payload is
//! always a 400 carrying the decoder's message, whatever the Content-Type.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::services::note::{self, NewNote, Note};
use crate::state::AppState;

/// `GET /notes/` — up to 100 most-recent notes, newest first.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, (StatusCode, String)> {
    let notes = note::list_notes(&state.pool)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Error fetching notes: {e}")))?;

    Ok(Json(notes))
}

/// `POST /notes/` — insert one note; the store generates the id.
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), (StatusCode, String)> {
    let new_note = decode_note(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    note::create_note(&state.pool, &new_note)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Error creating note: {e}")))?;

    Ok((StatusCode::CREATED, "Note created"))
}

pub(crate) fn decode_note(body: &[u8]) -> Result<NewNote, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
#[path = "notes_test.rs"]
mod tests;
