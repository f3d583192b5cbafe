use core::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` location on a grid, 0-indexed. Positions order by row first, then column,
/// which is also the tie-break order of the Dijkstra frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub const fn new(row: usize, col: usize) -> CellPosition {
        CellPosition { row, col }
    }

    /// The position shifted by `(delta_row, delta_col)`, or [None] if it would leave the
    /// non-negative quadrant.
    pub fn offset(&self, delta_row: isize, delta_col: isize) -> Option<CellPosition> {
        Some(CellPosition {
            row: self.row.checked_add_signed(delta_row)?,
            col: self.col.checked_add_signed(delta_col)?,
        })
    }

    /// Number of orthogonal unit steps between two positions.
    pub fn manhattan_distance(&self, other: &CellPosition) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from((row, col): (usize, usize)) -> Self {
        CellPosition::new(row, col)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
