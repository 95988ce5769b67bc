//! Solver strategies.
//!
//! Five traversal strategies behind a single capability: given a grid and
//! two designated cells, produce the visitation trace and a route. The
//! strategies differ in exploration order and in how they assemble the
//! route; `Algorithm` is the closed set of keys used to pick one.

mod backtracking;
mod bfs;
mod dfs;
mod recursive;
mod recursive_complete;

pub use backtracking::BacktrackingSolver;
pub use bfs::BfsSolver;
pub use dfs::DfsSolver;
pub use recursive::RecursiveSolver;
pub use recursive_complete::RecursiveCompleteSolver;

use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of one solve call.
///
/// Both sequences are value snapshots, independent of later grid edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Cells in the order the strategy first processed them. No duplicates.
    pub visited: Vec<Cell>,
    /// Route from start to end inclusive. Empty when no route exists;
    /// absence of a route is a normal outcome, not an error.
    pub path: Vec<Cell>,
}

/// Precondition violations reported by [`MazeSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Start coordinates lie outside the grid.
    StartOutOfBounds { row: usize, col: usize },
    /// End coordinates lie outside the grid.
    EndOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { row, col } => {
                write!(f, "start cell ({}, {}) is outside the grid", row, col)
            }
            Self::EndOutOfBounds { row, col } => {
                write!(f, "end cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Capability contract shared by every maze-solving strategy.
///
/// Implementations are stateless values; all per-call scratch lives on the
/// call itself, so one instance may be reused or shared across threads and
/// repeated calls with unchanged input return identical results.
pub trait MazeSolver {
    /// Search `grid` for a route from `start` to `end`.
    ///
    /// The cell arguments are addresses: implementations re-resolve them
    /// by coordinate against `grid` after bounds-checking, never trusting
    /// the passed-in state.
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError>;
}

/// Bounds-check the endpoints and re-resolve them against the grid.
pub(crate) fn resolve_endpoints(
    grid: &Grid,
    start: Cell,
    end: Cell,
) -> Result<(Cell, Cell), SolveError> {
    if !grid.in_bounds(start.row, start.col) {
        return Err(SolveError::StartOutOfBounds {
            row: start.row,
            col: start.col,
        });
    }
    if !grid.in_bounds(end.row, end.col) {
        return Err(SolveError::EndOutOfBounds {
            row: end.row,
            col: end.col,
        });
    }
    Ok((*grid.cell(start.row, start.col), *grid.cell(end.row, end.col)))
}

/// The closed set of solver strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Shortest path via level-order traversal.
    Bfs,
    /// Depth-first search with exact route assembly.
    Dfs,
    /// Down/right-only recursion; deliberately incomplete.
    Recursive,
    /// Four-directional recursion with eager route recording.
    RecursiveComplete,
    /// Four-directional recursion with true backtracking.
    Backtracking,
}

impl Algorithm {
    /// Every strategy, in selector order.
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Recursive,
            Algorithm::RecursiveComplete,
            Algorithm::Backtracking,
            Algorithm::Bfs,
            Algorithm::Dfs,
        ]
    }

    /// Build the strategy behind this key.
    pub fn solver(&self) -> Box<dyn MazeSolver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver::new()),
            Algorithm::Dfs => Box::new(DfsSolver::new()),
            Algorithm::Recursive => Box::new(RecursiveSolver::new()),
            Algorithm::RecursiveComplete => Box::new(RecursiveCompleteSolver::new()),
            Algorithm::Backtracking => Box::new(BacktrackingSolver::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Recursive => write!(f, "Recursive"),
            Algorithm::RecursiveComplete => write!(f, "Recursive Complete"),
            Algorithm::Backtracking => write!(f, "Backtracking"),
        }
    }
}

/// Error for an unrecognized algorithm key at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected bfs, dfs, recursive, recursive-complete or backtracking)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "recursive" => Ok(Algorithm::Recursive),
            "recursive-complete" | "recursive_complete" => Ok(Algorithm::RecursiveComplete),
            "backtracking" | "bt" => Ok(Algorithm::Backtracking),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(layout: &str) -> Grid {
        Grid::from_string(layout).unwrap()
    }

    fn run(algorithm: Algorithm, grid: &Grid) -> SolveResult {
        let start = grid.start().expect("layout has a start");
        let end = grid.end().expect("layout has an end");
        algorithm
            .solver()
            .solve(grid, start, end)
            .expect("endpoints in bounds")
    }

    fn coords(cells: &[Cell]) -> Vec<(usize, usize)> {
        cells.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn open_grid_bfs_is_shortest() {
        // 5x5 open grid, corner to corner: 9 cells on any shortest route.
        let g = grid("S....\n.....\n.....\n.....\n....E");
        let bfs = run(Algorithm::Bfs, &g);
        assert_eq!(bfs.path.len(), 9);
        assert!(bfs.visited.len() <= 25);

        for &alg in Algorithm::all() {
            let result = run(alg, &g);
            if !result.path.is_empty() {
                assert!(
                    bfs.path.len() <= result.path.len(),
                    "{} found a route shorter than BFS",
                    alg
                );
            }
        }
    }

    #[test]
    fn fully_blocking_row_means_no_path() {
        // The middle row cuts every 4-connected route between row 0 and row 2.
        let g = grid("S..\n###\n..E");
        for &alg in Algorithm::all() {
            let result = run(alg, &g);
            assert!(result.path.is_empty(), "{} crossed a full wall row", alg);
        }
    }

    #[test]
    fn corridor_is_found_by_every_strategy() {
        let g = grid("S...E");
        let expected = vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
        for &alg in Algorithm::all() {
            let result = run(alg, &g);
            assert_eq!(result.path.len(), 5, "{} missed the corridor", alg);
        }
        // Strategies with exact route assembly agree on the sequence.
        for alg in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Backtracking] {
            assert_eq!(coords(&run(alg, &g).path), expected, "{} order", alg);
        }
    }

    #[test]
    fn down_right_only_strategy_misses_left_routes() {
        // The only route from (0,1) to (1,0) begins with a left move.
        let g = grid(".S\nE#");
        let constrained = run(Algorithm::Recursive, &g);
        assert!(constrained.path.is_empty());

        for alg in [Algorithm::Bfs, Algorithm::Backtracking] {
            let result = run(alg, &g);
            assert_eq!(coords(&result.path), vec![(0, 1), (0, 0), (1, 0)]);
        }
    }

    #[test]
    fn start_equal_end_is_a_single_cell_result() {
        let g = grid("S...E");
        let start = g.start().unwrap();
        for &alg in Algorithm::all() {
            let result = alg.solver().solve(&g, start, start).unwrap();
            assert_eq!(coords(&result.visited), vec![(0, 0)], "{} visited", alg);
            assert_eq!(coords(&result.path), vec![(0, 0)], "{} path", alg);
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        let g = grid("S..#.\n.#...\n...#E");
        for &alg in Algorithm::all() {
            let solver = alg.solver();
            let start = g.start().unwrap();
            let end = g.end().unwrap();
            let first = solver.solve(&g, start, end).unwrap();
            let second = solver.solve(&g, start, end).unwrap();
            assert_eq!(first, second, "{} is not idempotent", alg);
        }
    }

    #[test]
    fn walls_never_appear_in_results() {
        let g = grid("S#..\n.#.#\n...E");
        for &alg in Algorithm::all() {
            let result = run(alg, &g);
            for cell in result.visited.iter().chain(result.path.iter()) {
                assert!(
                    !g.cell(cell.row, cell.col).is_wall(),
                    "{} reported wall ({}, {})",
                    alg,
                    cell.row,
                    cell.col
                );
            }
        }
    }

    #[test]
    fn start_leads_the_trace_and_duplicates_are_absent() {
        let g = grid("S...\n.##.\n...E");
        for &alg in Algorithm::all() {
            let result = run(alg, &g);
            assert_eq!(result.visited.first().copied(), g.start(), "{} trace", alg);

            let mut seen = std::collections::HashSet::new();
            for cell in &result.visited {
                assert!(seen.insert((cell.row, cell.col)), "{} revisited", alg);
            }
        }

        // The eager-append strategy is exempt from route duplicate-freedom;
        // the other four guarantee it.
        for alg in [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Recursive,
            Algorithm::Backtracking,
        ] {
            let result = run(alg, &g);
            let mut seen = std::collections::HashSet::new();
            for cell in &result.path {
                assert!(seen.insert((cell.row, cell.col)), "{} route repeats", alg);
            }
        }
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let g = grid("S.E");
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        for &alg in Algorithm::all() {
            let solver = alg.solver();
            let err = solver.solve(&g, Cell::new(5, 0), end).unwrap_err();
            assert_eq!(err, SolveError::StartOutOfBounds { row: 5, col: 0 });
            let err = solver.solve(&g, start, Cell::new(0, 9)).unwrap_err();
            assert_eq!(err, SolveError::EndOutOfBounds { row: 0, col: 9 });
        }
    }

    #[test]
    fn endpoints_are_resolved_by_coordinate() {
        // The passed-in cells carry stale state; only coordinates count.
        let g = grid("S.E");
        let stale_start = Cell::new(0, 0);
        let mut stale_end = Cell::new(0, 2);
        stale_end.state = crate::grid::CellState::Wall;
        let result = Algorithm::Bfs
            .solver()
            .solve(&g, stale_start, stale_end)
            .unwrap();
        assert_eq!(coords(&result.path), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn algorithm_keys_parse() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(
            "Recursive-Complete".parse::<Algorithm>().unwrap(),
            Algorithm::RecursiveComplete
        );
        assert_eq!("BT".parse::<Algorithm>().unwrap(), Algorithm::Backtracking);
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::RecursiveComplete.to_string(), "Recursive Complete");
    }
}
