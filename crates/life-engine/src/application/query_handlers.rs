//! Query handlers for the board context.
//!
//! Each query loads the stored snapshot, runs one engine operation on it and
//! returns a read-only view. Computed states are never written back.
//!
//! Engine work runs on the blocking thread pool so a long computation never
//! holds an async worker.

use life_core::board::Board;
use life_core::error::DomainError;
use life_core::repository::BoardRepository;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::application::limits::RequestLimits;
use crate::domain::engine;

/// Read-only view of a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// The board identifier.
    pub board_id: Uuid,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Cells as nested rows of `0`/`1`.
    pub state: Vec<Vec<u8>>,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            board_id: board.id,
            rows: board.rows(),
            columns: board.columns(),
            state: board.state.to_rows(),
        }
    }
}

async fn load_board(board_id: Uuid, repo: &dyn BoardRepository) -> Result<Board, DomainError> {
    repo.get(board_id)
        .await?
        .ok_or(DomainError::BoardNotFound(board_id))
}

fn check_step_budget(name: &str, value: u32, limits: &RequestLimits) -> Result<(), DomainError> {
    if value > limits.max_steps {
        return Err(DomainError::Validation(format!(
            "{name} must not exceed {}, got {value}",
            limits.max_steps
        )));
    }
    Ok(())
}

/// Rejects queries whose board size times `value` generations exceeds
/// `limits.max_cell_generations`.
fn check_work_budget(
    name: &str,
    value: u32,
    board: &Board,
    limits: &RequestLimits,
) -> Result<(), DomainError> {
    let cells = u64::try_from(board.state.cells().len()).unwrap_or(u64::MAX);
    let work = cells.saturating_mul(u64::from(value));
    if work > limits.max_cell_generations {
        return Err(DomainError::Validation(format!(
            "{name} {value} on a {}x{} board is {work} cell generations, limit is {}",
            board.rows(),
            board.columns(),
            limits.max_cell_generations
        )));
    }
    Ok(())
}

async fn run_engine<F, T>(work: F) -> Result<T, DomainError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("engine task failed: {e}")))
}

/// Retrieves a stored board by id.
///
/// # Errors
///
/// Returns `DomainError::BoardNotFound` if the id is unknown, or
/// `DomainError::Infrastructure` if the store fails.
pub async fn get_board_by_id(
    board_id: Uuid,
    repo: &dyn BoardRepository,
) -> Result<BoardView, DomainError> {
    let board = load_board(board_id, repo).await?;
    Ok(BoardView::from(&board))
}

/// Returns the board after a single generation.
///
/// # Errors
///
/// Returns `DomainError::BoardNotFound` if the id is unknown, or
/// `DomainError::Infrastructure` if the store fails.
pub async fn get_next_state(
    board_id: Uuid,
    repo: &dyn BoardRepository,
) -> Result<BoardView, DomainError> {
    let board = load_board(board_id, repo).await?;
    let next = run_engine(move || board.with_state(engine::step(&board.state))).await?;
    Ok(BoardView::from(&next))
}

/// Returns the board after `steps` generations.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `steps` exceeds `limits.max_steps` or
/// the board size times `steps` exceeds `limits.max_cell_generations`,
/// `DomainError::BoardNotFound` if the id is unknown, or
/// `DomainError::Infrastructure` if the store fails.
pub async fn get_state_after_steps(
    board_id: Uuid,
    steps: u32,
    limits: &RequestLimits,
    repo: &dyn BoardRepository,
) -> Result<BoardView, DomainError> {
    check_step_budget("steps", steps, limits)?;
    let board = load_board(board_id, repo).await?;
    check_work_budget("steps", steps, &board, limits)?;

    debug!(%board_id, steps, "advancing board");
    let advanced =
        run_engine(move || board.with_state(engine::step_n(&board.state, steps))).await?;
    Ok(BoardView::from(&advanced))
}

/// Returns the first fixed point the board reaches within `max_attempts`
/// generations.
///
/// # Errors
///
/// Returns `DomainError::NoStableState` if no fixed point is reached,
/// `DomainError::Validation` if `max_attempts` exceeds `limits.max_steps` or
/// the board size times `max_attempts` exceeds `limits.max_cell_generations`,
/// `DomainError::BoardNotFound` if the id is unknown, or
/// `DomainError::Infrastructure` if the store fails.
pub async fn get_final_state(
    board_id: Uuid,
    max_attempts: u32,
    limits: &RequestLimits,
    repo: &dyn BoardRepository,
) -> Result<BoardView, DomainError> {
    check_step_budget("max_attempts", max_attempts, limits)?;
    let board = load_board(board_id, repo).await?;
    check_work_budget("max_attempts", max_attempts, &board, limits)?;

    debug!(%board_id, max_attempts, "searching for fixed point");
    let stable = run_engine(move || {
        engine::stabilize(&board.state, max_attempts).map(|state| board.with_state(state))
    })
    .await??;
    debug!(%board_id, live_cells = stable.state.live_count(), "fixed point reached");
    Ok(BoardView::from(&stable))
}
