//! Readiness and static no-database routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /` — report whether the startup migration succeeded. Reads the
/// in-memory flag only; no database access on this path.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, "Server is ready")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Server is not ready")
    }
}

/// `GET /no_db_endpoint/` — fixed body, no dependencies.
pub async fn no_db_endpoint() -> &'static str {
    "No db endpoint"
}

/// `GET /no_db_endpoint2/` — fixed body, no dependencies.
pub async fn no_db_endpoint2() -> &'static str {
    "No db endpoint2"
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
