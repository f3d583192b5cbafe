use serde::{Deserialize, Serialize};

use crate::CellPosition;

/// Per-cell search bookkeeping with the same shape as the searched grid. Serialises as a plain
/// array of rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix<C = i32> {
    rows: Vec<Vec<C>>,
}

impl<C: Copy> DistanceMatrix<C> {
    /// A `rows` x `cols` matrix with every entry set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: C) -> Self {
        DistanceMatrix {
            rows: vec![vec![fill; cols]; rows],
        }
    }

    pub fn get(&self, pos: &CellPosition) -> C {
        self.rows[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: &CellPosition, value: C) {
        self.rows[pos.row][pos.col] = value;
    }

    pub fn rows(&self) -> &[Vec<C>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<C>> {
        self.rows
    }

    /// Iterates over every position together with its entry, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellPosition, C)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, &value)| (CellPosition::new(row, col), value))
        })
    }
}
