//! `PostgreSQL` implementation of the `BoardRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::warn;
use uuid::Uuid;

use life_core::board::Board;
use life_core::error::DomainError;
use life_core::grid::Grid;
use life_core::repository::BoardRepository;

const UPSERT_BOARD: &str = r"
INSERT INTO boards (board_id, row_count, column_count, state)
VALUES ($1, $2, $3, $4)
ON CONFLICT (board_id) DO UPDATE
SET row_count = EXCLUDED.row_count,
    column_count = EXCLUDED.column_count,
    state = EXCLUDED.state
";

const SELECT_BOARD: &str = r"
SELECT row_count, column_count, state
FROM boards
WHERE board_id = $1
";

/// PostgreSQL-backed board repository. Cell state is stored as JSONB nested
/// rows.
#[derive(Debug, Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    /// Creates a new `PgBoardRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infrastructure(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

fn dimension_to_db(value: usize) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| {
        DomainError::Infrastructure(format!("dimension {value} does not fit the boards table"))
    })
}

fn corrupt(board_id: Uuid, detail: &str) -> DomainError {
    warn!(%board_id, detail, "stored board failed validation");
    DomainError::Infrastructure(format!("stored board {board_id} is corrupt: {detail}"))
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    async fn put(&self, board: &Board) -> Result<(), DomainError> {
        sqlx::query(UPSERT_BOARD)
            .bind(board.id)
            .bind(dimension_to_db(board.rows())?)
            .bind(dimension_to_db(board.columns())?)
            .bind(Json(board.state.to_rows()))
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;
        Ok(())
    }

    async fn get(&self, board_id: Uuid) -> Result<Option<Board>, DomainError> {
        let row: Option<(i32, i32, Json<Vec<Vec<u8>>>)> = sqlx::query_as(SELECT_BOARD)
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure(&e))?;

        let Some((row_count, column_count, Json(state))) = row else {
            return Ok(None);
        };

        let grid = Grid::from_rows(&state).map_err(|e| corrupt(board_id, &e.to_string()))?;
        if dimension_to_db(grid.rows())? != row_count
            || dimension_to_db(grid.columns())? != column_count
        {
            return Err(corrupt(
                board_id,
                &format!(
                    "declared {row_count}x{column_count}, state is {}x{}",
                    grid.rows(),
                    grid.columns()
                ),
            ));
        }

        Ok(Some(Board::new(board_id, grid)))
    }
}
