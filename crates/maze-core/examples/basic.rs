//! Basic example of using the maze engine

use maze_core::{Algorithm, Grid};

fn main() {
    let layout = "\
S....#....
.###.#.##.
.#...#..#.
.#.###.##.
.#.....#..
.#####.#.#
.......#.E";

    let grid = Grid::from_string(layout).expect("layout is well-formed");
    println!("Maze ({} x {}):\n{}", grid.rows(), grid.cols(), grid);

    let start = grid.start().expect("layout has a start");
    let end = grid.end().expect("layout has an end");

    for &algorithm in Algorithm::all() {
        let result = algorithm
            .solver()
            .solve(&grid, start, end)
            .expect("endpoints are inside the grid");

        if result.path.is_empty() {
            println!(
                "{:<18} no route ({} cells explored)",
                algorithm.to_string(),
                result.visited.len()
            );
        } else {
            println!(
                "{:<18} route of {} cells, {} explored",
                algorithm.to_string(),
                result.path.len(),
                result.visited.len()
            );
        }
    }

    // Tag the shortest route on a copy of the grid and print it.
    let shortest = Algorithm::Bfs
        .solver()
        .solve(&grid, start, end)
        .expect("endpoints are inside the grid");
    let mut solved = grid.clone();
    solved.apply_path(&shortest.path);
    println!("\nShortest route:\n{}", solved);
}
