//! Shortest-path strategy: level-order traversal with parent tracking.

use super::{resolve_endpoints, MazeSolver, SolveError, SolveResult};
use crate::grid::{Cell, Grid};
use std::collections::{HashMap, VecDeque};

/// Neighbor probe order: down, up, right, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Breadth-first search.
///
/// The returned route has the minimum possible number of cells among all
/// traversable routes in the unweighted 4-connected walkable subgraph;
/// ties are broken by the fixed probe order above. The visitation trace
/// records cells in dequeue order and stops once the end is dequeued.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MazeSolver for BfsSolver {
    fn solve(&self, grid: &Grid, start: Cell, end: Cell) -> Result<SolveResult, SolveError> {
        let (start, end) = resolve_endpoints(grid, start, end)?;

        let mut result = SolveResult::default();
        if start.is_wall() {
            return Ok(result);
        }

        let mut seen = vec![vec![false; grid.cols()]; grid.rows()];
        let mut parents: HashMap<Cell, Cell> = HashMap::new();
        let mut queue: VecDeque<Cell> = VecDeque::new();

        queue.push_back(start);
        seen[start.row][start.col] = true;

        while let Some(cell) = queue.pop_front() {
            result.visited.push(cell);
            if cell == end {
                break;
            }
            for delta in DIRECTIONS {
                let Some((r, c)) = grid.step(cell.row, cell.col, delta) else {
                    continue;
                };
                let next = *grid.cell(r, c);
                if !seen[r][c] && !next.is_wall() {
                    seen[r][c] = true;
                    parents.insert(next, cell);
                    queue.push_back(next);
                }
            }
        }

        // Walk the parent links back from the end. A chain that stops short
        // of the start means the end was never enqueued: no route.
        let mut path = Vec::new();
        let mut cursor = end;
        while let Some(&parent) = parents.get(&cursor) {
            path.push(cursor);
            cursor = parent;
        }
        if cursor == start {
            path.push(start);
            path.reverse();
            result.path = path;
        }

        Ok(result)
    }
}
