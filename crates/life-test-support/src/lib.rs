//! Shared test doubles and canonical patterns for the Game of Life service.

mod patterns;
mod repository;

pub use patterns::{blinker, block, glider, glider_translated, grid, tub};
pub use repository::{EmptyBoardRepository, FailingBoardRepository, RecordingBoardRepository};
