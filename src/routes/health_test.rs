use super::*;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::state::test_helpers;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[tokio::test]
async fn index_reports_not_ready_before_migration() {
    let state = test_helpers::test_app_state();
    let response = index(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Server is not ready");
}

#[tokio::test]
async fn index_reports_ready_after_migration() {
    let state = test_helpers::test_app_state();
    state.mark_ready();
    let response = index(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Server is ready");
}

#[tokio::test]
async fn no_db_endpoints_return_fixed_bodies() {
    assert_eq!(no_db_endpoint().await, "No db endpoint");
    assert_eq!(no_db_endpoint2().await, "No db endpoint2");
}
