//! Routes for boards and their evolution.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use life_engine::application::query_handlers::{self, BoardView};
use life_engine::application::command_handlers;
use life_engine::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /add.
///
/// Dimensions are signed so that non-positive values reach validation
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct AddBoardRequest {
    /// Declared row count.
    pub rows: i64,
    /// Declared column count.
    pub columns: i64,
    /// Initial cells as nested rows of `0`/`1`.
    pub state: Option<Vec<Vec<u8>>>,
}

/// Response body for POST /add.
#[derive(Debug, Serialize)]
pub struct AddBoardResponse {
    /// Identifier assigned to the new board.
    pub board_id: Uuid,
}

/// POST /add
#[instrument(skip(state, request), fields(rows = request.rows, columns = request.columns))]
async fn add_board(
    State(state): State<AppState>,
    Json(request): Json<AddBoardRequest>,
) -> Result<(StatusCode, Json<AddBoardResponse>), ApiError> {
    let command = commands::AddBoard {
        correlation_id: Uuid::new_v4(),
        rows: request.rows,
        columns: request.columns,
        state: request.state,
    };

    info!(correlation_id = %command.correlation_id, "handling add_board command");

    let board_id =
        command_handlers::handle_add_board(&command, &state.limits, &*state.board_repository)
            .await?;

    Ok((StatusCode::CREATED, Json(AddBoardResponse { board_id })))
}

/// GET /{board_id}
#[instrument(skip(state))]
async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardView>, ApiError> {
    let view = query_handlers::get_board_by_id(board_id, &*state.board_repository).await?;
    Ok(Json(view))
}

/// GET /{board_id}/next
#[instrument(skip(state))]
async fn get_next_state(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardView>, ApiError> {
    let view = query_handlers::get_next_state(board_id, &*state.board_repository).await?;
    Ok(Json(view))
}

/// GET /{board_id}/steps/{steps}
#[instrument(skip(state))]
async fn get_state_after_steps(
    State(state): State<AppState>,
    Path((board_id, steps)): Path<(Uuid, u32)>,
) -> Result<Json<BoardView>, ApiError> {
    let view = query_handlers::get_state_after_steps(
        board_id,
        steps,
        &state.limits,
        &*state.board_repository,
    )
    .await?;
    Ok(Json(view))
}

/// GET /{board_id}/final/{max_attempts}
#[instrument(skip(state))]
async fn get_final_state(
    State(state): State<AppState>,
    Path((board_id, max_attempts)): Path<(Uuid, u32)>,
) -> Result<Json<BoardView>, ApiError> {
    let view = query_handlers::get_final_state(
        board_id,
        max_attempts,
        &state.limits,
        &*state.board_repository,
    )
    .await?;
    Ok(Json(view))
}

/// Returns the router for boards.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_board))
        .route("/{board_id}", get(get_board))
        .route("/{board_id}/next", get(get_next_state))
        .route("/{board_id}/steps/{steps}", get(get_state_after_steps))
        .route("/{board_id}/final/{max_attempts}", get(get_final_state))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use life_core::board::Board;
    use life_core::repository::BoardRepository;
    use life_engine::application::limits::RequestLimits;
    use life_test_support::{
        EmptyBoardRepository, FailingBoardRepository, RecordingBoardRepository, blinker, block,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(board_repository: Arc<dyn BoardRepository>) -> AppState {
        AppState::new(board_repository, RequestLimits::default())
    }

    async fn send(
        repo: Arc<dyn BoardRepository>,
        request: Request<Body>,
    ) -> (StatusCode, Value) {
        let app = router().with_state(app_state_with(repo));
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_add(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/add")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_board_returns_201_with_board_id() {
        // Arrange
        let repo = Arc::new(RecordingBoardRepository::default());
        let body = serde_json::json!({
            "rows": 3,
            "columns": 3,
            "state": [[0, 1, 0], [1, 0, 1], [0, 1, 0]]
        });

        // Act
        let (status, json) = send(repo.clone(), post_add(&body)).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        let board_id = Uuid::parse_str(json["board_id"].as_str().unwrap()).unwrap();
        let stored = repo.put_boards();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, board_id);
    }

    #[tokio::test]
    async fn test_add_board_returns_400_for_missing_state() {
        let body = serde_json::json!({ "rows": 2, "columns": 2 });

        let (status, json) = send(Arc::new(EmptyBoardRepository), post_add(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_add_board_returns_400_for_zero_rows() {
        let body = serde_json::json!({ "rows": 0, "columns": 1, "state": [] });

        let (status, json) = send(Arc::new(EmptyBoardRepository), post_add(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_add_board_returns_422_for_missing_fields() {
        let (status, _) = send(
            Arc::new(EmptyBoardRepository),
            post_add(&serde_json::json!({})),
        )
        .await;

        // Axum returns 422 for deserialization failures.
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_add_board_returns_500_when_store_fails() {
        let body = serde_json::json!({ "rows": 1, "columns": 1, "state": [[1]] });

        let (status, json) = send(Arc::new(FailingBoardRepository), post_add(&body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "infrastructure_error");
    }

    #[tokio::test]
    async fn test_get_board_returns_404_for_unknown_id() {
        let uri = format!("/{}", Uuid::new_v4());

        let (status, json) = send(Arc::new(EmptyBoardRepository), get_request(&uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "board_not_found");
    }

    #[tokio::test]
    async fn test_get_board_returns_400_for_malformed_id() {
        let (status, _) = send(Arc::new(EmptyBoardRepository), get_request("/not-a-uuid")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_next_state_returns_successor() {
        // Arrange
        let board = Board::new(Uuid::new_v4(), blinker());
        let repo = Arc::new(RecordingBoardRepository::with_board(board.clone()));
        let uri = format!("/{}/next", board.id);

        // Act
        let (status, json) = send(repo, get_request(&uri)).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["board_id"], board.id.to_string());
        assert_eq!(json["rows"], 5);
        assert_eq!(json["columns"], 5);
        assert_eq!(
            json["state"],
            serde_json::json!([
                [0, 0, 0, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 0, 0, 0, 0]
            ])
        );
    }

    #[tokio::test]
    async fn test_get_state_after_steps_returns_400_for_negative_steps() {
        let uri = format!("/{}/steps/-1", Uuid::new_v4());

        let (status, _) = send(Arc::new(EmptyBoardRepository), get_request(&uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_final_state_returns_fixed_point() {
        let board = Board::new(Uuid::new_v4(), block());
        let repo = Arc::new(RecordingBoardRepository::with_board(board.clone()));
        let uri = format!("/{}/final/3", board.id);

        let (status, json) = send(repo, get_request(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], serde_json::json!(block().to_rows()));
    }

    #[tokio::test]
    async fn test_get_final_state_returns_400_for_oscillator() {
        let board = Board::new(Uuid::new_v4(), blinker());
        let repo = Arc::new(RecordingBoardRepository::with_board(board.clone()));
        let uri = format!("/{}/final/10", board.id);

        let (status, json) = send(repo, get_request(&uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "no_stable_state");
    }

    #[tokio::test]
    async fn test_get_state_after_steps_returns_500_when_store_fails() {
        let uri = format!("/{}/steps/2", Uuid::new_v4());

        let (status, json) = send(Arc::new(FailingBoardRepository), get_request(&uri)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "infrastructure_error");
    }
}
