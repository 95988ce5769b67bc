//! Depth-first strategy with exact route assembly.

use super::{resolve_endpoints, MazeSolver, SolveError, SolveResult};
use crate::grid::{Cell, Grid};
use indexmap::IndexSet;

/// Neighbor probe order: down, up, right, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Recursive depth-first search.
///
/// Not shortest-path: the first route the probe order reaches wins. A cell
/// joins the route only after one of its children reaches the end, so the
/// route holds exactly the cells of one discovered route, no extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsSolver;

impl DfsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MazeSolver for DfsSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError> {
        let (start, end) = resolve_endpoints(grid, start, end)?;

        let mut search = Search {
            grid,
            end,
            visited: IndexSet::new(),
            path: Vec::new(),
        };
        search.explore(start.row, start.col);

        // Ancestors append as the recursion unwinds, end first; one flip
        // yields the public start-to-end order.
        search.path.reverse();

        Ok(SolveResult {
            visited: search.visited.into_iter().collect(),
            path: search.path,
        })
    }
}

/// Per-call scratch state threaded through the recursion.
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
        if cell == self.end {
            self.path.push(cell);
            return true;
        }
        for delta in DIRECTIONS {
            if let Some((r, c)) = self.grid.step(row, col, delta) {
                if self.explore(r, c) {
                    self.path.push(cell);
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

    fn solve(layout: &str) -> SolveResult {
        let grid = Grid::from_string(layout).unwrap();
        DfsSolver::new()
            .solve(&grid, grid.start().unwrap(), grid.end().unwrap())
            .unwrap()
    }

    fn coords(cells: &[Cell]) -> Vec<(usize, usize)> {
        cells.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn route_runs_start_to_end() {
        let result = solve("S..\n...\n..E");
        assert_eq!(result.path.first().map(|c| (c.row, c.col)), Some((0, 0)));
        assert_eq!(result.path.last().map(|c| (c.row, c.col)), Some((2, 2)));
    }

    #[test]
    fn down_branch_is_explored_first() {
        // Open 2x2: depth-first goes down, then right, then up to the end.
        let result = solve("SE\n..");
        assert_eq!(
            coords(&result.visited),
            vec![(0, 0), (1, 0), (1, 1), (0, 1)]
        );
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (1, 0), (1, 1), (0, 1)]
        );
    }

    #[test]
    fn dead_ends_stay_out_of_the_route() {
        // The probe dives down the left column, dead-ends, and the route
        // still contains only the surviving branch.
        let result = solve("S..\n.#.\n.#E");
        assert_eq!(
            coords(&result.path),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
        );
        // The dead-end column was explored all the same.
        assert!(result.visited.contains(&Cell::new(2, 0)));
    }

    #[test]
    fn no_route_leaves_the_path_empty() {
        let result = solve("S#E");
        assert!(result.path.is_empty());
        assert_eq!(coords(&result.visited), vec![(0, 0)]);
    }
}
