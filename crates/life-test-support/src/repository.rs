//! Test repositories — mock `BoardRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use life_core::board::Board;
use life_core::error::DomainError;
use life_core::repository::BoardRepository;
use uuid::Uuid;

/// A board repository that records every `put` and answers `get` with a
/// preconfigured board when the id matches.
#[derive(Debug, Default)]
pub struct RecordingBoardRepository {
    stored: Option<Board>,
    put_boards: Mutex<Vec<Board>>,
    get_ids: Mutex<Vec<Uuid>>,
}

impl RecordingBoardRepository {
    /// Create a repository that returns `board` from `get` when asked for its
    /// id and `None` for every other id.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            stored: Some(board),
            ..Self::default()
        }
    }

    /// Returns a snapshot of every board passed to `put`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn put_boards(&self) -> Vec<Board> {
        self.put_boards.lock().unwrap().clone()
    }

    /// Returns every id passed to `get`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn get_ids(&self) -> Vec<Uuid> {
        self.get_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoardRepository for RecordingBoardRepository {
    async fn put(&self, board: &Board) -> Result<(), DomainError> {
        self.put_boards.lock().unwrap().push(board.clone());
        Ok(())
    }

    async fn get(&self, board_id: Uuid) -> Result<Option<Board>, DomainError> {
        self.get_ids.lock().unwrap().push(board_id);
        Ok(self.stored.clone().filter(|board| board.id == board_id))
    }
}

/// A board repository that never finds anything and silently accepts puts.
/// Useful for testing "board not found" scenarios.
#[derive(Debug)]
pub struct EmptyBoardRepository;

#[async_trait]
impl BoardRepository for EmptyBoardRepository {
    async fn put(&self, _board: &Board) -> Result<(), DomainError> {
        Ok(())
    }

    async fn get(&self, _board_id: Uuid) -> Result<Option<Board>, DomainError> {
        Ok(None)
    }
}

/// A board repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingBoardRepository;

#[async_trait]
impl BoardRepository for FailingBoardRepository {
    async fn put(&self, _board: &Board) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn get(&self, _board_id: Uuid) -> Result<Option<Board>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
