use crate::{CellPosition, PathingGrid};

use super::{unweighted_search, GridSolver, SearchResult};

/// Depth-first search. Finds a path whenever one exists, but makes no promise about its length.
/// The distance matrix holds the depth at which each cell was discovered.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn search(&self, grid: &PathingGrid, start: CellPosition, goal: CellPosition) -> SearchResult {
        unweighted_search::<Vec<CellPosition>>(grid, start, goal)
    }
}
