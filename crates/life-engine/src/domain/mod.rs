//! Domain layer: the engine and the commands it is driven by.

pub mod commands;
pub mod engine;
