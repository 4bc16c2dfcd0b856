//! Persisted board snapshots.

use uuid::Uuid;

use crate::grid::Grid;

/// A named, persisted grid.
///
/// `rows` and `columns` are read from the grid, so a board's declared
/// dimensions always match its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Board identifier.
    pub id: Uuid,
    /// Current cell state.
    pub state: Grid,
}

impl Board {
    /// Creates a board snapshot.
    #[must_use]
    pub fn new(id: Uuid, state: Grid) -> Self {
        Self { id, state }
    }

    /// Number of rows in the board's grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.state.rows()
    }

    /// Number of columns in the board's grid.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.state.columns()
    }

    /// Returns a new snapshot of this board holding `state`.
    #[must_use]
    pub fn with_state(&self, state: Grid) -> Self {
        Self { id: self.id, state }
    }
}
