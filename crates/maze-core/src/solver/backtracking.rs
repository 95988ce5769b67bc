//! Four-directional recursion with true backtracking.

use super::{resolve_endpoints, MazeSolver, SolveError, SolveResult};
use crate::grid::{Cell, Grid};
use indexmap::IndexSet;

/// Neighbor probe order: down, right, up, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Backtracking depth-first search.
///
/// Cells join the route on entry and are popped again when none of their
/// neighbors reaches the end, so a non-empty route is exactly one simple
/// route with no extraneous cells. The visited set persists for the whole
/// call: a cell explored once is never re-entered from another branch,
/// which bounds the search but means the strategy finds some route, not
/// necessarily the one a different probe order would find.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MazeSolver for BacktrackingSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError> {
        let (start, end) = resolve_endpoints(grid, start, end)?;

        let mut search = Search {
            grid,
            end,
            visited: IndexSet::new(),
            path: Vec::new(),
        };
        search.explore(start.row, start.col);

        Ok(SolveResult {
            visited: search.visited.into_iter().collect(),
            path: search.path,
        })
    }
}

struct Search<'a> {
    grid: &'a Grid,
    end: Cell,
    visited: IndexSet<Cell>,
    path: Vec<Cell>,
}

impl Search<'_> {
    fn explore(&mut self, row: usize, col: usize) -> bool {
        if !self.grid.is_walkable(row, col) {
            return false;
        }
        let cell = *self.grid.cell(row, col);
        if !self.visited.insert(cell) {
            return false;
        }
        self.path.push(cell);
        if cell == self.end {
            return true;
        }
        for delta in DIRECTIONS {
            if let Some((r, c)) = self.grid.step(row, col, delta) {
                if self.explore(r, c) {
                    return true;
                }
            }
        }
        // Dead end: undo the tentative step. The visited mark stays.
        self.path.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(layout: &str) -> SolveResult {
        let grid = Grid::from_string(layout).unwrap();
        BacktrackingSolver::new()
            .solve(&grid, grid.start().unwrap(), grid.end().unwrap())
            .unwrap()
    }

    fn coords(cells: &[Cell]) -> Vec<(usize, usize)> {
        cells.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn dead_ends_are_undone() {
        let result = solve("S..\n.#.\n.#E");
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
        );
        // The dead-end column was explored and stays in the trace.
        assert!(result.visited.contains(&Cell::new(2, 0)));
    }

    #[test]
    fn route_is_simple_and_connected() {
        let result = solve("S...\n.##.\n...E");
        let path = coords(&result.path);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(2, 3)));
        for pair in path.windows(2) {
            let dr = pair[0].0.abs_diff(pair[1].0);
            let dc = pair[0].1.abs_diff(pair[1].1);
            assert_eq!(dr + dc, 1, "route steps must be 4-connected");
        }
    }

    #[test]
    fn persistent_visited_set_blocks_re_entry() {
        // Two routes exist; the one the probe order commits to first wins
        // and the other side is explored at most once.
        let result = solve("S.\n..\n.E");
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (1, 0), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn no_route_leaves_the_path_empty() {
        let result = solve("S\n#\nE");
        assert!(result.path.is_empty());
        assert_eq!(coords(&result.visited), vec![(0, 0)]);
    }
}
