//! Shared application state.

use std::sync::Arc;

use life_core::repository::BoardRepository;
use life_engine::application::limits::RequestLimits;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The board store.
    pub board_repository: Arc<dyn BoardRepository>,
    /// Per-request work limits.
    pub limits: RequestLimits,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(board_repository: Arc<dyn BoardRepository>, limits: RequestLimits) -> Self {
        Self {
            board_repository,
            limits,
        }
    }
}
