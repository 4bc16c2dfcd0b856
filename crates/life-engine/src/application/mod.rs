//! Application layer: command and query handlers.

pub mod command_handlers;
pub mod limits;
pub mod query_handlers;
