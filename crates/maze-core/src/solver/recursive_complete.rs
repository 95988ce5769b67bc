//! Four-directional recursion with eager route recording.

use super::{resolve_endpoints, MazeSolver, SolveError, SolveResult};
use crate::grid::{Cell, Grid};
use indexmap::IndexSet;

/// Neighbor probe order: down, right, up, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Four-directional recursion that records every entered cell in the route
/// immediately and never removes it when the branch dies.
///
/// Known quirk, kept on purpose: when a dead-end branch is explored before
/// the branch that reaches the end, the returned route carries the
/// abandoned cells too, so it is only an exact route when the end lies on
/// the first-tried branch at every fork. Callers compare this strategy
/// against [`BacktrackingSolver`] to observe the difference; do not
/// "fix" it here. When no route exists at all the route is reported
/// empty like every other strategy.
///
/// [`BacktrackingSolver`]: super::BacktrackingSolver
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveCompleteSolver;

impl RecursiveCompleteSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MazeSolver for RecursiveCompleteSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError> {
        let (start, end) = resolve_endpoints(grid, start, end)?;

        let mut search = Search {
            grid,
            end,
            visited: IndexSet::new(),
            path: Vec::new(),
        };
        if !search.explore(start.row, start.col) {
            search.path.clear();
        }

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
        // Recorded before the branch is known to survive, and kept either way.
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
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::BacktrackingSolver;

    fn grid(layout: &str) -> Grid {
        Grid::from_string(layout).unwrap()
    }

    fn solve(g: &Grid) -> SolveResult {
        RecursiveCompleteSolver::new()
            .solve(g, g.start().unwrap(), g.end().unwrap())
            .unwrap()
    }

    fn coords(cells: &[Cell]) -> Vec<(usize, usize)> {
        cells.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn exact_route_when_the_first_branch_wins() {
        // Straight down then right: no fork ever fails.
        let result = solve(&grid("S#\n.#\n.E"));
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (1, 0), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn dead_end_branch_cells_stay_in_the_route() {
        // The probe first dives down the left column, which dead-ends at
        // (2,0); those cells are never removed from the route.
        let g = grid("S..\n.#.\n.#E");
        let result = solve(&g);
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
        );

        // The backtracking strategy reports the same grid without the
        // abandoned column.
        let exact = BacktrackingSolver::new()
            .solve(&g, g.start().unwrap(), g.end().unwrap())
            .unwrap();
        assert_eq!(
            coords(&exact.path),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
        );
        assert!(result.path.len() > exact.path.len());
    }

    #[test]
    fn unreachable_end_reports_no_route() {
        let result = solve(&grid("S#E"));
        assert!(result.path.is_empty());
        assert_eq!(coords(&result.visited), vec![(0, 0)]);
    }
}
