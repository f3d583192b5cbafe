use std::collections::VecDeque;

use crate::{CellPosition, PathingGrid};

use super::{unweighted_search, GridSolver, SearchResult};

/// Breadth-first search. The distance matrix holds the number of steps from the start for
/// every discovered cell and [UNVISITED](crate::UNVISITED) elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search(&self, grid: &PathingGrid, start: CellPosition, goal: CellPosition) -> SearchResult {
        unweighted_search::<VecDeque<CellPosition>>(grid, start, goal)
    }
}
