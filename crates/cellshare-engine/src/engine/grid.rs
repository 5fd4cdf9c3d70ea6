//! Fixed-size grid storage and cell positions.
//!
//! Every sheet holds a square grid of [`GRID_SIZE`] x [`GRID_SIZE`] numbers.
//! Positions arrive from callers as raw signed coordinates and are only turned
//! into a [`CellPos`] once they are known to lie inside the grid.
//!
//! # Examples
//!
//! ```
//! use cellshare_engine::CellPos;
//!
//! let pos = CellPos::checked(1, 2).unwrap();
//! assert_eq!((pos.row, pos.col), (1, 2));
//! assert!(CellPos::checked(3, 0).is_none());
//! assert!(CellPos::checked(-1, 0).is_none());
//! ```

use std::fmt;

/// Number of rows and columns in every sheet.
pub const GRID_SIZE: usize = 3;

/// Cell values of a sheet, indexed as `grid[row][col]`.
pub type Grid = [[f64; GRID_SIZE]; GRID_SIZE];

/// A grid with every cell set to zero.
pub fn empty_grid() -> Grid {
    [[0.0; GRID_SIZE]; GRID_SIZE]
}

/// A position inside the grid (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Validate raw coordinates. Returns None unless both lie in `[0, GRID_SIZE)`.
    pub fn checked(x: i64, y: i64) -> Option<CellPos> {
        let row = usize::try_from(x).ok().filter(|r| *r < GRID_SIZE)?;
        let col = usize::try_from(y).ok().filter(|c| *c < GRID_SIZE)?;
        Some(CellPos { row, col })
    }

    /// Overwrite this cell in a grid.
    pub fn set(&self, grid: &mut Grid, value: f64) {
        grid[self.row][self.col] = value;
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
