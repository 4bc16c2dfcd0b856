//! Cell grid representation.
//!
//! A [`Grid`] is a flat, row-major buffer of [`Cell`]s. Its dimensions are
//! fixed at construction and there is no public way to mutate an existing
//! grid, so every grid is rectangular and non-empty by construction.

use thiserror::Error;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// A dead cell, encoded as `0`.
    #[default]
    Dead,
    /// A live cell, encoded as `1`.
    Alive,
}

impl Cell {
    /// Returns `true` if the cell is alive.
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dead),
            1 => Ok(Self::Alive),
            other => Err(other),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }
}

/// Reasons a grid cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns is zero.
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// A row does not have the same length as the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A cell value other than 0 or 1.
    #[error("cell ({row}, {column}) has value {value}, expected 0 or 1")]
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// The value found.
        value: u8,
    },

    /// `rows * columns` does not fit in `usize`.
    #[error("grid of {rows}x{columns} cells is too large")]
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// A flat buffer whose length is not `rows * columns`.
    #[error("buffer holds {actual} cells, expected {expected}")]
    LengthMismatch {
        /// `rows * columns`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

/// An immutable rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `GridError::EmptyDimension` if either dimension is zero,
    /// `GridError::TooLarge` if `rows * columns` overflows, or
    /// `GridError::LengthMismatch` if `cells.len() != rows * columns`.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimension { rows, columns });
        }
        let expected = rows
            .checked_mul(columns)
            .ok_or(GridError::TooLarge { rows, columns })?;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid from nested rows of `0`/`1` values, the shape boards
    /// take on the wire and in storage.
    ///
    /// # Errors
    ///
    /// Returns `GridError` if there are no rows, the first row is empty, the
    /// rows have different lengths, or a value is neither 0 nor 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.is_empty() || columns == 0 {
            return Err(GridError::EmptyDimension {
                rows: rows.len(),
                columns,
            });
        }

        let capacity = rows.len().checked_mul(columns).ok_or(GridError::TooLarge {
            rows: rows.len(),
            columns,
        })?;
        let mut cells = Vec::with_capacity(capacity);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: row_index,
                    expected: columns,
                    actual: row.len(),
                });
            }
            for (column_index, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|value| GridError::InvalidCell {
                    row: row_index,
                    column: column_index,
                    value,
                })?;
                cells.push(cell);
            }
        }

        Self::from_cells(rows.len(), columns, cells)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, column)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[self.index(row, column)])
        } else {
            None
        }
    }

    /// Returns `true` if `(row, column)` is in bounds and alive.
    #[must_use]
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(Cell::is_alive)
    }

    /// The row-major cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Builds a grid of the same dimensions by computing each cell from its
    /// coordinates and current value.
    #[must_use]
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| f(i / self.columns, i % self.columns, cell))
            .collect();
        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Converts back to nested rows of `0`/`1` values.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}
