//! Route modules.

pub mod boards;
pub mod docs;
pub mod health;
