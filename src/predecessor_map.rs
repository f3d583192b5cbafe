use log::warn;

use crate::CellPosition;

/// Dense, position-indexed record of the cell each visited cell was reached from. Internal to
/// a single search.
#[derive(Clone, Debug)]
pub(crate) struct PredecessorMap {
    cols: usize,
    parents: Vec<Option<CellPosition>>,
}

impl PredecessorMap {
    pub(crate) fn new(rows: usize, cols: usize) -> PredecessorMap {
        PredecessorMap {
            cols,
            parents: vec![None; rows * cols],
        }
    }

    fn ix(&self, pos: &CellPosition) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn get(&self, pos: &CellPosition) -> Option<CellPosition> {
        self.parents[self.ix(pos)]
    }

    /// Records `parent` for `pos`, replacing any earlier entry.
    pub(crate) fn set(&mut self, pos: &CellPosition, parent: CellPosition) {
        let ix = self.ix(pos);
        self.parents[ix] = Some(parent);
    }

    /// Records `parent` only if `pos` has none yet. Returns whether the entry was written.
    pub(crate) fn set_once(&mut self, pos: &CellPosition, parent: CellPosition) -> bool {
        let ix = self.ix(pos);
        if self.parents[ix].is_some() {
            return false;
        }
        self.parents[ix] = Some(parent);
        true
    }

    /// Walks back from `end` to `start` and returns the cells in start-to-end order. Yields an
    /// empty path if `end` was never reached from `start`. The walk visits at most one cell per
    /// grid cell, so a corrupted chain cannot loop forever.
    pub(crate) fn reconstruct(&self, start: CellPosition, end: CellPosition) -> Vec<CellPosition> {
        let mut path = vec![end];
        let mut at = end;
        while at != start {
            match self.get(&at) {
                Some(parent) if path.len() <= self.parents.len() => {
                    path.push(parent);
                    at = parent;
                }
                Some(_) => {
                    warn!("Predecessor chain from {} never reaches {}", end, start);
                    return Vec::new();
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
