//! Board store implementations.
//!
//! `PgBoardRepository` persists boards in PostgreSQL. `MemoryBoardRepository`
//! keeps them in process memory for deployments without a database.

use sqlx::migrate::Migrator;

pub mod memory_board_repository;
pub mod pg_board_repository;

/// Embedded schema migrations for the `boards` table.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");
