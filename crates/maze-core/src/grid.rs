//! Grid and cell model.
//!
//! A grid is a rectangular matrix of cells addressed `(row, col)`. Cells
//! carry a state tag; their coordinates are fixed once placed. The solvers
//! borrow the grid read-only and consult only the `Wall` state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// State of a single cell in the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Open and traversable.
    Empty,
    /// Blocked; never traversable.
    Wall,
    /// The designated start cell.
    Start,
    /// The designated end cell.
    End,
    /// Presentation tag for cells on a solved route. Solvers never read it.
    Path,
}

impl CellState {
    /// Single-character form used by the text layout (see [`Grid::from_string`]).
    pub fn to_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Path => '*',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            '*' => Some(CellState::Path),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Empty => write!(f, "Empty"),
            CellState::Wall => write!(f, "Wall"),
            CellState::Start => write!(f, "Start"),
            CellState::End => write!(f, "End"),
            CellState::Path => write!(f, "Path"),
        }
    }
}

/// A single cell, identified by its coordinate pair.
///
/// Equality and hashing consider only the coordinates: two cells at the
/// same position are the same cell regardless of state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

impl Cell {
    /// Create a cell at `(row, col)` in the `Empty` state.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            state: CellState::Empty,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.state == CellState::Wall
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

/// Errors raised when building a grid from a text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The layout contained no rows.
    Empty,
    /// A row's width differs from the first row's.
    Ragged { row: usize, expected: usize, got: usize },
    /// A character outside the `. # S E *` alphabet.
    UnknownChar { row: usize, col: usize, ch: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze layout is empty"),
            Self::Ragged { row, expected, got } => {
                write!(f, "row {} has {} cells, expected {}", row, got, expected)
            }
            Self::UnknownChar { row, col, ch } => {
                write!(f, "unknown cell character {:?} at ({}, {})", ch, row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular maze grid.
///
/// Construction guarantees rectangularity; only cell states vary afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `rows x cols` grid of empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Parse a text layout: one line per row, `.` empty, `#` wall, `S`
    /// start, `E` end, `*` path tag. Fails fast on ragged rows or unknown
    /// characters.
    pub fn from_string(layout: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = layout.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(GridError::Empty);
        }
        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    got,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch)
                    .ok_or(GridError::UnknownChar { row, col, ch })?;
                let mut cell = Cell::new(row, col);
                cell.state = state;
                cells.push(cell);
            }
        }
        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at `(row, col)`. Callers check bounds first.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.in_bounds(row, col)
            .then(|| self.cell(row, col))
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|c| !c.is_wall())
    }

    /// Coordinates one step from `(row, col)` in `delta`, if inside the grid.
    pub fn step(&self, row: usize, col: usize, delta: (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(delta.0)?;
        let c = col.checked_add_signed(delta.1)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The unique start cell, if one has been placed.
    pub fn start(&self) -> Option<Cell> {
        self.cells
            .iter()
            .find(|c| c.state == CellState::Start)
            .copied()
    }

    /// The unique end cell, if one has been placed.
    pub fn end(&self) -> Option<Cell> {
        self.cells
            .iter()
            .find(|c| c.state == CellState::End)
            .copied()
    }

    /// Designate `(row, col)` as the start cell, returning any previous
    /// start to `Empty`.
    pub fn set_start(&mut self, row: usize, col: usize) {
        if let Some(prev) = self.start() {
            self.cell_mut(prev.row, prev.col).state = CellState::Empty;
        }
        self.cell_mut(row, col).state = CellState::Start;
    }

    /// Designate `(row, col)` as the end cell, returning any previous end
    /// to `Empty`.
    pub fn set_end(&mut self, row: usize, col: usize) {
        if let Some(prev) = self.end() {
            self.cell_mut(prev.row, prev.col).state = CellState::Empty;
        }
        self.cell_mut(row, col).state = CellState::End;
    }

    /// Flip `Empty` to `Wall` and back. Start/end/path cells are untouched.
    pub fn toggle_wall(&mut self, row: usize, col: usize) {
        let cell = self.cell_mut(row, col);
        match cell.state {
            CellState::Empty => cell.state = CellState::Wall,
            CellState::Wall => cell.state = CellState::Empty,
            _ => {}
        }
    }

    /// Tag the given route cells with `Path`, sparing start and end.
    pub fn apply_path(&mut self, path: &[Cell]) {
        for step in path {
            let cell = self.cell_mut(step.row, step.col);
            if cell.state != CellState::Start && cell.state != CellState::End {
                cell.state = CellState::Path;
            }
        }
    }

    /// Drop all `Path` tags, returning those cells to `Empty`.
    pub fn clear_transient(&mut self) {
        for cell in &mut self.cells {
            if cell.state == CellState::Path {
                cell.state = CellState::Empty;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cell(row, col).state.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
