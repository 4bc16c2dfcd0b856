//! Well-known Life patterns, each placed on a small dead border.

use life_core::grid::Grid;

/// Builds a grid from literal rows.
///
/// # Panics
///
/// Panics if the rows do not form a valid grid.
#[must_use]
pub fn grid<R: AsRef<[u8]>>(rows: &[R]) -> Grid {
    Grid::from_rows(rows).expect("test pattern must be a valid grid")
}

/// 2x2 block centred in a 4x4 grid. A still life.
#[must_use]
pub fn block() -> Grid {
    grid(&[[0u8, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]])
}

/// Horizontal blinker in the middle of a 5x5 grid. Oscillates with period 2.
#[must_use]
pub fn blinker() -> Grid {
    grid(&[
        [0u8, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
}

/// Tub filling a 3x3 grid. A still life.
#[must_use]
pub fn tub() -> Grid {
    grid(&[[0u8, 1, 0], [1, 0, 1], [0, 1, 0]])
}

/// South-east glider in the top-left corner of a 5x5 grid.
#[must_use]
pub fn glider() -> Grid {
    grid(&[
        [0u8, 1, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [1, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
}

/// [`glider`] after four generations: same phase, one cell down and right.
#[must_use]
pub fn glider_translated() -> Grid {
    grid(&[
        [0u8, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
}
