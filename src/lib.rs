//! # grid_traversal
//!
//! Pathfinding between two cells of a 4-connected obstacle grid with a choice of
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) or
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
//! Every search returns the path it found together with a distance matrix describing which
//! cells it explored, which makes the crate suited to visualising how the strategies differ.
//! All moves cost one. Neighbours are always expanded up, down, left, right, and the Dijkstra
//! frontier breaks ties by row and then column, so results are reproducible.
//!
//! Connected components of the grid are pre-computed, so whether a path exists can also be
//! answered without searching.
mod distance_matrix;
pub mod error;
pub mod pathing_grid;
mod position;
mod predecessor_map;
pub mod request;
pub mod solver;
mod uniform_cost;

use itertools::Itertools;

pub use distance_matrix::DistanceMatrix;
pub use error::{Error, ErrorKind, Result};
pub use pathing_grid::PathingGrid;
pub use position::CellPosition;
pub use solver::{Algorithm, GridSolver, SearchResult};

/// Wire marker of an obstacle. Any other marker is traversable.
pub const BLOCKED: i32 = 1;
/// Distance of a cell that breadth- or depth-first search never discovered.
pub const UNVISITED: i32 = -1;
/// Distance of a cell that Dijkstra's algorithm never reached.
pub const UNREACHED: i32 = i32::MAX;
/// Row and column offsets of the orthogonal neighbours, in expansion order: up, down, left, right.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Computes a path from `start` to `goal` with the selected algorithm. Fails only if an
/// endpoint is out of bounds or blocked; an unreachable goal gives a result with an empty path.
pub fn find_path(
    grid: &PathingGrid,
    start: CellPosition,
    goal: CellPosition,
    algorithm: Algorithm,
) -> Result<SearchResult> {
    algorithm.solver().get_path_single_goal(grid, start, goal)
}

/// Checks that `path` is non-empty, stays on traversable cells and moves one orthogonal step at
/// a time.
pub fn is_valid_path(grid: &PathingGrid, path: &[CellPosition]) -> bool {
    !path.is_empty()
        && path.iter().all(|p| grid.can_move_to_point(p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}
