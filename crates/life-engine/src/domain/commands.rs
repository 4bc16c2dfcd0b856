//! Commands for the board context.

use uuid::Uuid;

/// Command to store a new board.
///
/// Fields carry the raw request values; `handle_add_board` validates them
/// before anything reaches the engine or the store.
#[derive(Debug, Clone)]
pub struct AddBoard {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Declared row count.
    pub rows: i64,
    /// Declared column count.
    pub columns: i64,
    /// Initial cells as nested rows of `0`/`1`.
    pub state: Option<Vec<Vec<u8>>>,
}

impl AddBoard {
    /// The type name for this command, used in logs.
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        "board.add"
    }
}
