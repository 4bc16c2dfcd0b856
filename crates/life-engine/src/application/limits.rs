//! Per-request work limits.
//!
//! The engine has no cancellation, so the request layer bounds grid size and
//! step counts before calling it.

/// Default upper bound on `steps` and `max_attempts`.
pub const DEFAULT_MAX_STEPS: u32 = 10_000;

/// Default upper bound on `rows * columns`.
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Default upper bound on `rows * columns * steps` for a single query.
pub const DEFAULT_MAX_CELL_GENERATIONS: u64 = 100_000_000;

/// Limits applied by command and query handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    /// Largest accepted step count or attempt budget.
    pub max_steps: u32,
    /// Largest accepted board size in cells.
    pub max_cells: usize,
    /// Largest accepted board size multiplied by the step count or attempt
    /// budget of one query.
    pub max_cell_generations: u64,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_cells: DEFAULT_MAX_CELLS,
            max_cell_generations: DEFAULT_MAX_CELL_GENERATIONS,
        }
    }
}
