use super::*;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use crate::state::test_helpers;

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    (status, String::from_utf8(bytes.to_vec()).expect("body should be utf-8"))
}

#[tokio::test]
async fn root_reflects_readiness_flag() {
    let state = test_helpers::test_app_state();

    let (status, body) = send(app(state.clone()), Method::GET, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Server is not ready");

    state.mark_ready();
    let (status, body) = send(app(state), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Server is ready");
}

#[tokio::test]
async fn static_routes_serve_fixed_bodies() {
    let state = test_helpers::test_app_state();

    let (status, body) = send(app(state.clone()), Method::GET, "/no_db_endpoint/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "No db endpoint");

    let (status, body) = send(app(state), Method::GET, "/no_db_endpoint2/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "No db endpoint2");
}

#[tokio::test]
async fn trailing_slash_is_significant() {
    let state = test_helpers::test_app_state();
    let (status, _) = send(app(state), Method::GET, "/no_db_endpoint").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let state = test_helpers::test_app_state();
    let (status, _) = send(app(state), Method::GET, "/nope/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_on_notes_is_405() {
    let state = test_helpers::test_app_state();
    let (status, _) = send(app(state), Method::DELETE, "/notes/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn post_notes_rejects_malformed_body() {
    let state = test_helpers::test_app_state();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/notes/")
        .body(Body::from("not json"))
        .expect("request should build");

    let response = app(state).oneshot(request).await.expect("router should respond");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
