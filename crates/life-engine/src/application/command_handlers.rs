//! Command handlers for the board context.
//!
//! Validates incoming boards and persists them. Nothing that fails here ever
//! reaches the engine.

use life_core::board::Board;
use life_core::error::DomainError;
use life_core::grid::Grid;
use life_core::repository::BoardRepository;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::limits::RequestLimits;
use crate::domain::commands::AddBoard;

/// Builds a grid from the command, checking it against its declared
/// dimensions and the size limit.
fn validated_grid(command: &AddBoard, limits: &RequestLimits) -> Result<Grid, DomainError> {
    let (Ok(rows), Ok(columns)) = (
        usize::try_from(command.rows),
        usize::try_from(command.columns),
    ) else {
        return Err(DomainError::Validation(
            "rows and columns must be positive".into(),
        ));
    };
    if rows == 0 || columns == 0 {
        return Err(DomainError::Validation(
            "rows and columns must be positive".into(),
        ));
    }

    let Some(state) = &command.state else {
        return Err(DomainError::Validation("state must be provided".into()));
    };

    let cells = rows.checked_mul(columns).unwrap_or(usize::MAX);
    if cells > limits.max_cells {
        return Err(DomainError::Validation(format!(
            "board has {cells} cells, limit is {}",
            limits.max_cells
        )));
    }

    if state.len() != rows {
        return Err(DomainError::Validation(format!(
            "state has {} rows, expected {rows}",
            state.len()
        )));
    }
    if let Some((index, row)) = state.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(DomainError::Validation(format!(
            "state row {index} has {} columns, expected {columns}",
            row.len()
        )));
    }

    Grid::from_rows(state).map_err(|e| DomainError::Validation(e.to_string()))
}

/// Handles the `AddBoard` command: validates the board, assigns it a fresh
/// id, and stores the initial snapshot.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the dimensions are not positive, the
/// state is missing, does not match the declared dimensions, holds a value
/// other than 0/1, or exceeds `limits.max_cells`. Returns
/// `DomainError::Infrastructure` if the store fails.
pub async fn handle_add_board(
    command: &AddBoard,
    limits: &RequestLimits,
    repo: &dyn BoardRepository,
) -> Result<Uuid, DomainError> {
    let grid = validated_grid(command, limits)?;
    let board = Board::new(Uuid::new_v4(), grid);

    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        rows = board.rows(),
        columns = board.columns(),
        "storing new board"
    );

    repo.put(&board).await?;

    info!(board_id = %board.id, correlation_id = %command.correlation_id, "board added");

    Ok(board.id)
}
