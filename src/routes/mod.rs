//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the five HTTP endpoints under a single Axum router. Trailing slashes
//! are significant; anything outside this table falls through to the router
//! defaults (404 for unknown paths, 405 for unsupported methods on `/notes/`).

pub mod health;
pub mod notes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::index))
        .route("/no_db_endpoint/", get(health::no_db_endpoint))
        .route("/no_db_endpoint2/", get(health::no_db_endpoint2))
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
