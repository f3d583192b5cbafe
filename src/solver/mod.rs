use crate::error::{Error, Result};
use crate::predecessor_map::PredecessorMap;
use crate::{CellPosition, DistanceMatrix, PathingGrid, UNVISITED};
use core::fmt;
use log::{debug, info, trace};
use std::collections::VecDeque;
use std::str::FromStr;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Outcome of one search: the path from start to end (empty when the end cannot be reached) and
/// the distance matrix the solver filled in along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Vec<CellPosition>,
    pub distances: DistanceMatrix,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or [None] if no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

pub trait GridSolver {
    /// Runs the search. Both endpoints are assumed to be in bounds and traversable; use
    /// [get_path_single_goal](Self::get_path_single_goal) when that is not known.
    fn search(&self, grid: &PathingGrid, start: CellPosition, goal: CellPosition) -> SearchResult;

    /// Validates the endpoints and computes a path from start to goal. Failing to find a path is
    /// not an error: the result then holds an empty path.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: CellPosition,
        goal: CellPosition,
    ) -> Result<SearchResult> {
        grid.validate_endpoints(&start, &goal)?;
        debug!(
            "Searching {}x{} grid from {} to {}",
            grid.rows(),
            grid.cols(),
            start,
            goal
        );
        let result = self.search(grid, start, goal);
        match result.steps() {
            Some(steps) => info!("Path found from {} to {}: {} steps", start, goal, steps),
            None => info!("No path found from {} to {}", start, goal),
        }
        Ok(result)
    }
}

/// The search strategies a caller can select by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Uniform-cost search, ordered by distance then row then column.
    #[default]
    Dijkstra,
    /// Breadth-first search; shortest paths on the uniform grid.
    Bfs,
    /// Depth-first search; finds some path, not necessarily a short one.
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::Dfs];

    pub fn solver(&self) -> &'static dyn GridSolver {
        match self {
            Algorithm::Dijkstra => &DijkstraSolver,
            Algorithm::Bfs => &BfsSolver,
            Algorithm::Dfs => &DfsSolver,
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(Error::UnsupportedAlgorithm {
                name: other.to_owned(),
            }),
        }
    }
}

/// Order in which the unweighted traversal takes cells back out of its frontier.
pub(crate) trait Frontier: Default {
    fn insert(&mut self, position: CellPosition);
    fn take(&mut self) -> Option<CellPosition>;
}

/// First in, first out.
impl Frontier for VecDeque<CellPosition> {
    fn insert(&mut self, position: CellPosition) {
        self.push_back(position);
    }
    fn take(&mut self) -> Option<CellPosition> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Frontier for Vec<CellPosition> {
    fn insert(&mut self, position: CellPosition) {
        self.push(position);
    }
    fn take(&mut self) -> Option<CellPosition> {
        self.pop()
    }
}

/// Shared traversal of BFS and DFS. A cell is marked visited by giving it a distance when it
/// is inserted into the frontier, so each cell enters the frontier at most once and keeps the
/// predecessor it was first discovered from.
pub(crate) fn unweighted_search<F: Frontier>(
    grid: &PathingGrid,
    start: CellPosition,
    goal: CellPosition,
) -> SearchResult {
    let mut distances = DistanceMatrix::new(grid.rows(), grid.cols(), UNVISITED);
    let mut parents = PredecessorMap::new(grid.rows(), grid.cols());
    let mut frontier = F::default();
    distances.set(&start, 0);
    frontier.insert(start);

    while let Some(current) = frontier.take() {
        trace!("Processing cell {}", current);
        if current == goal {
            let path = parents.reconstruct(start, goal);
            return SearchResult { path, distances };
        }
        let current_distance = distances.get(&current);
        for next in grid.neighborhood_points(&current) {
            if distances.get(&next) == UNVISITED {
                distances.set(&next, current_distance + 1);
                parents.set_once(&next, current);
                frontier.insert(next);
                trace!("Adding cell {}", next);
            }
        }
    }
    SearchResult {
        path: Vec::new(),
        distances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        for name in ["astar", "BFS", ""] {
            match name.parse::<Algorithm>() {
                Err(Error::UnsupportedAlgorithm { name: rejected }) => assert_eq!(rejected, name),
                other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
            }
        }
    }

    #[test]
    fn validation_happens_before_search() {
        let grid = PathingGrid::from_rows(&[[0, 1]]).unwrap();
        for algorithm in Algorithm::ALL {
            let result = algorithm.solver().get_path_single_goal(
                &grid,
                CellPosition::new(0, 0),
                CellPosition::new(0, 1),
            );
            assert!(matches!(result, Err(Error::BlockedEndpoint { .. })));
        }
    }

    #[test]
    fn steps_counts_edges() {
        let mut result = SearchResult {
            path: Vec::new(),
            distances: DistanceMatrix::new(1, 2, UNVISITED),
        };
        assert!(!result.found());
        assert_eq!(result.steps(), None);
        result.path = vec![CellPosition::new(0, 0), CellPosition::new(0, 1)];
        assert_eq!(result.steps(), Some(1));
    }
}
