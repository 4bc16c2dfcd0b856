//! Board repository abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::board::Board;
use crate::error::DomainError;

/// Key-value store for board snapshots, keyed by board id.
///
/// Implementations must give read-your-writes for a single id.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Insert `board`, replacing any snapshot already stored under its id.
    async fn put(&self, board: &Board) -> Result<(), DomainError>;

    /// Load the snapshot stored under `board_id`, or `None` if absent.
    async fn get(&self, board_id: Uuid) -> Result<Option<Board>, DomainError>;
}
