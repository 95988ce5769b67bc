//! Maze-solving engine: grid model and five traversal strategies.
//!
//! The caller owns the grid and the designated start/end cells; a strategy
//! takes a grid snapshot plus the two endpoints and produces an ordered
//! visitation trace and a route. The engine never mutates the grid, does
//! no I/O, and knows nothing about rendering or input — those live in the
//! front-end crate.
//!
//! ```
//! use maze_core::{Algorithm, Grid};
//!
//! let grid = Grid::from_string("S.#\n..#\n#.E").unwrap();
//! let result = Algorithm::Bfs
//!     .solver()
//!     .solve(&grid, grid.start().unwrap(), grid.end().unwrap())
//!     .unwrap();
//! assert_eq!(result.path.len(), 5);
//! ```

pub mod grid;
pub mod solver;

pub use grid::{Cell, CellState, Grid, GridError};
pub use solver::{
    Algorithm, BacktrackingSolver, BfsSolver, DfsSolver, MazeSolver, RecursiveCompleteSolver,
    RecursiveSolver, SolveError, SolveResult, UnknownAlgorithm,
};
