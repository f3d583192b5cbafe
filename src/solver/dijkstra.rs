use crate::uniform_cost::uniform_cost;
use crate::{CellPosition, PathingGrid};

use super::{GridSolver, SearchResult};

/// Uniform-cost search with unit step costs. Cells that were never reached keep
/// [UNREACHED](crate::UNREACHED) in the distance matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn search(&self, grid: &PathingGrid, start: CellPosition, goal: CellPosition) -> SearchResult {
        let (path, distances) = uniform_cost::<i32, _>(grid, start, goal, |_, _| 1);
        SearchResult { path, distances }
    }
}
