use grid_traversal::{find_path, Algorithm, CellPosition, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let pathing_grid = PathingGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    println!("{}", pathing_grid);
    let start = CellPosition::new(0, 0);
    let end = CellPosition::new(2, 2);
    let result = find_path(&pathing_grid, start, end, Algorithm::Bfs).unwrap();
    println!("Path:");
    for p in &result.path {
        println!("{}", p);
    }
    println!("\nDistances:");
    for row in result.distances.rows() {
        println!("{:?}", row);
    }
}
