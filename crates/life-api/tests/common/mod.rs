//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use life_board_store::memory_board_repository::MemoryBoardRepository;
use life_core::repository::BoardRepository;
use life_engine::application::limits::RequestLimits;
use tower::ServiceExt;

use life_api::state::AppState;

/// Build the full app router over the given board store.
pub fn build_test_app(board_repository: Arc<dyn BoardRepository>) -> Router {
    build_test_app_with_limits(board_repository, RequestLimits::default())
}

/// Build the full app router with custom request limits.
pub fn build_test_app_with_limits(
    board_repository: Arc<dyn BoardRepository>,
    limits: RequestLimits,
) -> Router {
    life_api::app(AppState::new(board_repository, limits))
}

/// A fresh in-memory board store.
pub fn memory_store() -> Arc<dyn BoardRepository> {
    Arc::new(MemoryBoardRepository::new())
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Add a board through the API and return its id.
pub async fn add_board(store: &Arc<dyn BoardRepository>, state: serde_json::Value) -> String {
    let rows = state.as_array().map_or(0, Vec::len);
    let columns = state[0].as_array().map_or(0, Vec::len);
    let (status, json) = post_json(
        build_test_app(store.clone()),
        "/api/v1/boards/add",
        &serde_json::json!({ "rows": rows, "columns": columns, "state": state }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["board_id"].as_str().unwrap().to_owned()
}
