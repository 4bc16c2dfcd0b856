//! In-process implementation of the `BoardRepository` trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use life_core::board::Board;
use life_core::error::DomainError;
use life_core::repository::BoardRepository;

/// Board repository backed by a process-local map.
///
/// Used when no database is configured. Boards live as long as the process.
#[derive(Debug, Default)]
pub struct MemoryBoardRepository {
    boards: RwLock<HashMap<Uuid, Board>>,
}

impl MemoryBoardRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::Infrastructure("board map lock poisoned".into())
}

#[async_trait]
impl BoardRepository for MemoryBoardRepository {
    async fn put(&self, board: &Board) -> Result<(), DomainError> {
        let mut boards = self.boards.write().map_err(|_| poisoned())?;
        boards.insert(board.id, board.clone());
        Ok(())
    }

    async fn get(&self, board_id: Uuid) -> Result<Option<Board>, DomainError> {
        let boards = self.boards.read().map_err(|_| poisoned())?;
        Ok(boards.get(&board_id).cloned())
    }
}
