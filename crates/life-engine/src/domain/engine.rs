//! The Life Engine.
//!
//! Pure functions from one grid snapshot to the next. Nothing here performs
//! I/O, logs or holds state, so any number of calls may run in parallel.

use life_core::error::DomainError;
use life_core::grid::{Cell, Grid};
use thiserror::Error;

/// `stabilize` ran out of attempts before two consecutive generations matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no fixed point reached within {max_attempts} attempts")]
pub struct NoStableState {
    /// The attempt budget that was exhausted.
    pub max_attempts: u32,
}

impl From<NoStableState> for DomainError {
    fn from(err: NoStableState) -> Self {
        Self::NoStableState {
            max_attempts: err.max_attempts,
        }
    }
}

/// Advances `grid` by one generation.
///
/// Each cell looks at its eight Moore neighbours. Neighbours outside the grid
/// count as dead; there is no wraparound.
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    grid.map_cells(|row, column, cell| next_cell(cell, count_live_neighbors(grid, row, column)))
}

/// Applies [`step`] `n` times. `n == 0` returns a copy of the input.
///
/// Runs all `n` generations even if the grid stops changing.
#[must_use]
pub fn step_n(grid: &Grid, n: u32) -> Grid {
    let mut current = grid.clone();
    for _ in 0..n {
        current = step(&current);
    }
    current
}

/// Steps until a generation equals the one before it, for at most
/// `max_attempts` generations, and returns that fixed point.
///
/// Only period-1 fixed points are detected. Oscillators such as a blinker
/// never satisfy the test and always exhaust the budget.
///
/// # Errors
///
/// Returns `NoStableState` if no fixed point is found within `max_attempts`
/// steps. `max_attempts == 0` always fails.
pub fn stabilize(grid: &Grid, max_attempts: u32) -> Result<Grid, NoStableState> {
    let mut current = grid.clone();
    for _ in 0..max_attempts {
        let next = step(&current);
        if grids_equal(&current, &next) {
            return Ok(next);
        }
        current = next;
    }
    Err(NoStableState { max_attempts })
}

/// True iff both grids have the same dimensions and identical cells.
#[must_use]
pub fn grids_equal(a: &Grid, b: &Grid) -> bool {
    a.rows() == b.rows() && a.columns() == b.columns() && a.cells() == b.cells()
}

fn count_live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let mut live = 0;
    for r in row.saturating_sub(1)..=row + 1 {
        for c in column.saturating_sub(1)..=column + 1 {
            if (r, c) != (row, column) && grid.is_alive(r, c) {
                live += 1;
            }
        }
    }
    live
}

fn next_cell(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
