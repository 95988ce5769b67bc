//! Down/right-only recursive strategy.

use super::{resolve_endpoints, MazeSolver, SolveError, SolveResult};
use crate::grid::{Cell, Grid};
use indexmap::IndexSet;

/// Neighbor probe order: down, right. Up and left are never tried.
const DIRECTIONS: [(isize, isize); 2] = [(1, 0), (0, 1)];

/// Deliberately limited recursion that only ever moves down or right.
///
/// Kept as a weaker strategy for comparison: it reports no route whenever
/// every surviving route needs an up or left move, even though the other
/// strategies solve the same grid. Route assembly matches [`DfsSolver`].
///
/// [`DfsSolver`]: super::DfsSolver
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSolver;

impl RecursiveSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MazeSolver for RecursiveSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError> {
        let (start, end) = resolve_endpoints(grid, start, end)?;

        let mut search = Search {
            grid,
            end,
            visited: IndexSet::new(),
            path: Vec::new(),
        };
        search.explore(start.row, start.col);
        search.path.reverse();

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
