//! This module implements uniform-cost search over the 4-neighbourhood of a [PathingGrid]. It
//! is generic over the cost type so that step costs other than one can be plugged in, while
//! the frontier order is pinned to `(cost, row, col)` for reproducible output.
use log::{debug, trace};
use num_traits::{Bounded, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::predecessor_map::PredecessorMap;
use crate::{CellPosition, DistanceMatrix, PathingGrid};

struct SmallestCostHolder<K> {
    cost: K,
    position: CellPosition,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.position.eq(&other.position)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: lowest cost first, then lowest row, then lowest column
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.position.cmp(&self.position),
            s => s,
        }
    }
}

/// Runs uniform-cost search from `start` until `goal` is popped or the frontier runs dry.
/// `step_cost` gives the cost of moving between two adjacent cells and must be positive.
/// Returns the path (empty if `goal` was not reached) and the best known cost of every cell,
/// with [Bounded::max_value] marking cells that were never reached.
pub(crate) fn uniform_cost<C, FC>(
    grid: &PathingGrid,
    start: CellPosition,
    goal: CellPosition,
    mut step_cost: FC,
) -> (Vec<CellPosition>, DistanceMatrix<C>)
where
    C: Zero + Bounded + Ord + Copy,
    FC: FnMut(&CellPosition, &CellPosition) -> C,
{
    let mut distances = DistanceMatrix::new(grid.rows(), grid.cols(), C::max_value());
    let mut parents = PredecessorMap::new(grid.rows(), grid.cols());
    distances.set(&start, Zero::zero());

    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        cost: C::zero(),
        position: start,
    });
    while let Some(SmallestCostHolder { cost, position }) = to_see.pop() {
        trace!("Processing cell {}", position);
        if position == goal {
            let path = parents.reconstruct(start, goal);
            return (path, distances);
        }
        // A cell may sit in the heap several times if a better way to reach it was found
        // after it was pushed. Only the entry matching the recorded cost is expanded.
        if cost > distances.get(&position) {
            continue;
        }
        for successor in grid.neighborhood_points(&position) {
            let new_cost = cost + step_cost(&position, &successor);
            if new_cost < distances.get(&successor) {
                distances.set(&successor, new_cost);
                parents.set(&successor, position);
                to_see.push(SmallestCostHolder {
                    cost: new_cost,
                    position: successor,
                });
                trace!("Adding cell {}", successor);
            }
        }
    }
    debug!("Frontier exhausted before reaching {}", goal);
    (Vec::new(), distances)
}
