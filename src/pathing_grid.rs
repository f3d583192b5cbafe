use core::fmt;

use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Endpoint, Error, Result};
use crate::{CellPosition, BLOCKED, DIRECTIONS};

/// [PathingGrid] stores the immutable obstacle layout of a search as a flat [bool] buffer where
/// [true] marks a blocked cell. It also maintains a [UnionFind] over the free cells, so whether
/// two cells are connected can be answered without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
    pub components: UnionFind<usize>,
}

impl PathingGrid {
    /// Builds a grid from rows of integer markers. [BLOCKED] marks an obstacle, every other value
    /// is traversable. Fails if the grid is empty or ragged.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<PathingGrid> {
        let cols = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(Error::EmptyGrid),
        };
        let mut blocked = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::NonRectangularGrid {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            blocked.extend(values.iter().map(|&v| v == BLOCKED));
        }
        Ok(PathingGrid::from_blocked(rows.len(), cols, blocked))
    }

    /// Parses an ASCII map with one line per row. `.`, `S` and `G` are traversable, anything
    /// else is an obstacle. Surrounding whitespace and blank lines are ignored.
    pub fn from_ascii(map: &str) -> Result<PathingGrid> {
        let rows = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.bytes()
                    .map(|b| if [b'.', b'S', b'G'].contains(&b) { 0 } else { BLOCKED })
                    .collect::<Vec<i32>>()
            })
            .collect::<Vec<_>>();
        PathingGrid::from_rows(&rows)
    }

    fn from_blocked(rows: usize, cols: usize, blocked: Vec<bool>) -> PathingGrid {
        let mut grid = PathingGrid {
            rows,
            cols,
            blocked,
            components: UnionFind::new(rows * cols),
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of a position, row-major.
    pub fn get_ix(&self, pos: &CellPosition) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn in_bounds(&self, pos: &CellPosition) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Whether the in-bounds cell at `pos` is an obstacle.
    pub fn is_blocked(&self, pos: &CellPosition) -> bool {
        self.blocked[self.get_ix(pos)]
    }

    /// The admissibility filter shared by every solver: the candidate lies within the grid and
    /// is not blocked. Takes signed coordinates so that candidates above or left of the grid can
    /// be tested directly.
    pub fn can_move_to(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.rows
            && (col as usize) < self.cols
            && !self.blocked[row as usize * self.cols + col as usize]
    }

    pub fn can_move_to_point(&self, pos: &CellPosition) -> bool {
        self.in_bounds(pos) && !self.is_blocked(pos)
    }

    /// The traversable orthogonal neighbours of `pos`, always in [DIRECTIONS] order
    /// (up, down, left, right).
    pub fn neighborhood_points(&self, pos: &CellPosition) -> SmallVec<[CellPosition; 4]> {
        DIRECTIONS
            .iter()
            .filter(|&&(dr, dc)| self.can_move_to(pos.row as isize + dr, pos.col as isize + dc))
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .collect()
    }

    /// Checks that both endpoints of a search lie on traversable cells.
    pub fn validate_endpoints(&self, start: &CellPosition, goal: &CellPosition) -> Result<()> {
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, goal)] {
            if !self.in_bounds(pos) {
                return Err(Error::OutOfBounds {
                    endpoint,
                    position: *pos,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if self.is_blocked(pos) {
                return Err(Error::BlockedEndpoint {
                    endpoint,
                    position: *pos,
                });
            }
        }
        Ok(())
    }

    /// Retrieves the component id a given [CellPosition] belongs to.
    pub fn get_component(&self, pos: &CellPosition) -> usize {
        self.components.find(self.get_ix(pos))
    }

    /// Checks if start and goal are traversable and on the same component.
    pub fn reachable(&self, start: &CellPosition, goal: &CellPosition) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Cells outside the grid or
    /// blocked cells are never reachable.
    pub fn unreachable(&self, start: &CellPosition, goal: &CellPosition) -> bool {
        if self.can_move_to_point(start) && self.can_move_to_point(goal) {
            let start_ix = self.get_ix(start);
            let goal_ix = self.get_ix(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are on different components", start, goal);
                true
            }
        } else {
            true
        }
    }

    /// Generates a new [UnionFind] structure and links every free cell to its free right and
    /// down neighbours, which covers all edges of the 4-neighbourhood.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let point = CellPosition::new(row, col);
            if self.is_blocked(&point) {
                continue;
            }
            let parent_ix = self.get_ix(&point);
            for neighbour in [CellPosition::new(row + 1, col), CellPosition::new(row, col + 1)] {
                if self.can_move_to_point(&neighbour) {
                    let ix = self.get_ix(&neighbour);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.blocked.chunks(self.cols) {
            let values = row.iter().map(|&b| b as i32).collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grids() {
        let no_rows: Vec<Vec<i32>> = vec![];
        assert!(matches!(PathingGrid::from_rows(&no_rows), Err(Error::EmptyGrid)));
        let no_cols: Vec<Vec<i32>> = vec![vec![]];
        assert!(matches!(PathingGrid::from_rows(&no_cols), Err(Error::EmptyGrid)));
    }

    #[test]
    fn rejects_ragged_grids() {
        let rows = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        match PathingGrid::from_rows(&rows) {
            Err(Error::NonRectangularGrid {
                row,
                expected,
                found,
            }) => assert_eq!((row, expected, found), (1, 3, 2)),
            other => panic!("expected a NonRectangularGrid error, got {other:?}"),
        }
    }

    /// Only the wall marker blocks; start, end and path markers left behind by a UI are free.
    #[test]
    fn ui_markers_are_traversable() {
        let grid = PathingGrid::from_rows(&[[2, 1, 3, 4]]).unwrap();
        assert!(grid.can_move_to(0, 0));
        assert!(!grid.can_move_to(0, 1));
        assert!(grid.can_move_to(0, 2));
        assert!(grid.can_move_to(0, 3));
        assert!(!grid.can_move_to(-1, 0));
        assert!(!grid.can_move_to(0, 4));
    }

    #[test]
    fn neighbour_order_is_up_down_left_right() {
        let grid = PathingGrid::from_rows(&[[0; 3]; 3]).unwrap();
        let centre = CellPosition::new(1, 1);
        let neighbours = grid.neighborhood_points(&centre);
        assert_eq!(
            neighbours.as_slice(),
            &[
                CellPosition::new(0, 1),
                CellPosition::new(2, 1),
                CellPosition::new(1, 0),
                CellPosition::new(1, 2),
            ]
        );
        // Corners drop the out-of-bounds directions but keep the order.
        let corner = grid.neighborhood_points(&CellPosition::new(0, 0));
        assert_eq!(
            corner.as_slice(),
            &[CellPosition::new(1, 0), CellPosition::new(0, 1)]
        );
    }

    #[test]
    fn neighbours_skip_walls() {
        let grid = PathingGrid::from_ascii(
            "
            .#.
            ...
            ",
        )
        .unwrap();
        let neighbours = grid.neighborhood_points(&CellPosition::new(0, 0));
        assert_eq!(neighbours.as_slice(), &[CellPosition::new(1, 0)]);
    }

    #[test]
    fn endpoint_validation() {
        let grid = PathingGrid::from_rows(&[[0, 1], [0, 0]]).unwrap();
        let free = CellPosition::new(1, 1);
        assert!(grid.validate_endpoints(&CellPosition::new(0, 0), &free).is_ok());
        assert!(matches!(
            grid.validate_endpoints(&CellPosition::new(0, 1), &free),
            Err(Error::BlockedEndpoint {
                endpoint: Endpoint::Start,
                ..
            })
        ));
        assert!(matches!(
            grid.validate_endpoints(&free, &CellPosition::new(2, 0)),
            Err(Error::OutOfBounds {
                endpoint: Endpoint::End,
                rows: 2,
                cols: 2,
                ..
            })
        ));
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let grid = PathingGrid::from_rows(&[[0, 1, 0], [0, 1, 0]]).unwrap();
        let p1 = CellPosition::new(0, 0);
        let p2 = CellPosition::new(1, 1);
        let p3 = CellPosition::new(1, 0);
        let p4 = CellPosition::new(0, 2);
        assert!(!grid.components.equiv(grid.get_ix(&p1), grid.get_ix(&p2)));
        assert!(grid.components.equiv(grid.get_ix(&p1), grid.get_ix(&p3)));
        assert!(!grid.components.equiv(grid.get_ix(&p1), grid.get_ix(&p4)));
        assert_eq!(grid.get_component(&p1), grid.get_component(&p3));
    }

    /// Asserts that the two corners are connected around a centre wall.
    #[test]
    fn reachable_around_wall() {
        let grid = PathingGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
        let start = CellPosition::new(0, 0);
        let end = CellPosition::new(2, 2);
        assert!(grid.reachable(&start, &end));
        assert!(grid.unreachable(&start, &CellPosition::new(1, 1)));
        assert!(grid.unreachable(&start, &CellPosition::new(3, 0)));
    }

    // Diagonal neighbours never connect on a 4-grid.
    #[test]
    fn diagonal_cells_are_unreachable() {
        let grid = PathingGrid::from_rows(&[[0, 1], [1, 0]]).unwrap();
        assert!(grid.unreachable(&CellPosition::new(0, 0), &CellPosition::new(1, 1)));
    }

    #[test]
    fn display_prints_markers() {
        let grid = PathingGrid::from_ascii("S#\n.G").unwrap();
        assert_eq!(grid.to_string(), "Grid:\n[0, 1]\n[0, 0]\n");
    }
}
