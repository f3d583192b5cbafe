use grid_traversal::{find_path, Algorithm, CellPosition, PathingGrid, UNREACHED, UNVISITED};

// Runs all three strategies on the same maze and draws each path, so that the shortest
// BFS/Dijkstra routes can be compared with the meandering DFS one.

const MAZE: &str = "
S.........
.####.###.
.#......#.
.#.####.#.
...#..#...
##.#..###.
...#.....G
";

fn draw(grid: &PathingGrid, path: &[CellPosition]) {
    for row in 0..grid.rows() {
        let line = (0..grid.cols())
            .map(|col| {
                let p = CellPosition::new(row, col);
                if grid.is_blocked(&p) {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
}

fn main() {
    let grid = PathingGrid::from_ascii(MAZE).unwrap();
    let start = CellPosition::new(0, 0);
    let end = CellPosition::new(grid.rows() - 1, grid.cols() - 1);
    println!("Reachable: {}\n", grid.reachable(&start, &end));
    for algorithm in Algorithm::ALL {
        let result = find_path(&grid, start, end, algorithm).unwrap();
        let explored = result
            .distances
            .iter()
            .filter(|&(_, d)| d != UNVISITED && d != UNREACHED)
            .count();
        match result.steps() {
            Some(steps) => println!("{algorithm}: {steps} steps, {explored} cells explored"),
            None => println!("{algorithm}: no path, {explored} cells explored"),
        }
        draw(&grid, &result.path);
        println!();
    }
}
