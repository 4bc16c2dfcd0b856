//! Life Engine — Conway's Game of Life as a stateless service.
//!
//! `domain` holds the pure stepping and convergence functions. `application`
//! validates requests, talks to the board store and hands snapshots to the
//! engine.

pub mod application;
pub mod domain;
