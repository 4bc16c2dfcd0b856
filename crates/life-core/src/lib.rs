//! Life Core — shared domain types.
//!
//! This crate defines the grid, board, error and repository abstractions
//! that every other crate depends on. It contains no infrastructure code.

pub mod board;
pub mod error;
pub mod grid;
pub mod repository;
