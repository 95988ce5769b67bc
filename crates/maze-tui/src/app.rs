use crate::metrics::{ResultStore, SolveRecord};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use maze_core::{Algorithm, Cell, Grid, SolveResult};
use rand::Rng;
use std::time::{Duration, Instant};

/// Smallest allowed grid side. Anything smaller leaves no room to paint.
pub const MIN_DIMENSION: usize = 5;

/// Playback pacing: one explored cell per frame, then one route cell per frame.
pub const VISITED_FRAME: Duration = Duration::from_millis(30);
pub const PATH_FRAME: Duration = Duration::from_millis(80);

/// Fraction of empty cells turned into walls by the scatter command.
const WALL_DENSITY: f64 = 0.25;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// What a click (space/enter) at the cursor does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SetStart,
    SetEnd,
    ToggleWall,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::SetStart => "Set Start",
            Mode::SetEnd => "Set End",
            Mode::ToggleWall => "Toggle Wall",
        }
    }
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Painting the grid
    Editing,
    /// Replaying a solve frame-by-frame
    Playback,
    /// Stored metrics table
    Results,
}

/// Frame-by-frame replay of one solve result.
///
/// The engine returns the complete result synchronously; pacing is purely
/// a presentation concern and lives here.
pub struct Playback {
    pub visited: Vec<Cell>,
    pub path: Vec<Cell>,
    pub shown_visited: usize,
    pub shown_path: usize,
    /// Step mode: frames advance on keypress instead of the clock
    pub manual: bool,
    next_frame: Instant,
}

impl Playback {
    fn new(result: SolveResult, manual: bool) -> Self {
        Self {
            visited: result.visited,
            path: result.path,
            shown_visited: 0,
            shown_path: 0,
            manual,
            next_frame: Instant::now(),
        }
    }

    pub fn finished(&self) -> bool {
        self.shown_visited >= self.visited.len() && self.shown_path >= self.path.len()
    }

    /// Reveal the next cell: the whole trace first, then the route.
    pub fn advance(&mut self) {
        if self.shown_visited < self.visited.len() {
            self.shown_visited += 1;
            let frame = if self.shown_visited == self.visited.len() {
                PATH_FRAME
            } else {
                VISITED_FRAME
            };
            self.next_frame += frame;
        } else if self.shown_path < self.path.len() {
            self.shown_path += 1;
            self.next_frame += PATH_FRAME;
        }
    }

    fn tick(&mut self) {
        if self.manual {
            return;
        }
        let now = Instant::now();
        while !self.finished() && self.next_frame <= now {
            self.advance();
        }
    }
}

/// The main application state
pub struct App {
    pub grid: Grid,
    pub cursor: (usize, usize),
    pub mode: Mode,
    pub theme: Theme,
    theme_index: usize,
    algorithm_index: usize,
    pub screen: ScreenState,
    pub playback: Option<Playback>,
    pub message: Option<String>,
    message_timer: u32,
    pub store: Box<dyn ResultStore>,
    /// Cached records for the results screen
    pub records: Vec<SolveRecord>,
}

impl App {
    pub fn new(grid: Grid, store: Box<dyn ResultStore>, theme: Theme) -> Self {
        Self {
            grid,
            cursor: (0, 0),
            mode: Mode::ToggleWall,
            theme,
            theme_index: 0,
            algorithm_index: 0,
            screen: ScreenState::Editing,
            playback: None,
            message: None,
            message_timer: 0,
            store,
            records: Vec::new(),
        }
    }

    /// The currently selected strategy
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::all()[self.algorithm_index]
    }

    /// Get the tick rate based on current screen
    pub fn tick_rate(&self) -> Duration {
        match self.screen {
            ScreenState::Playback => Duration::from_millis(15),
            ScreenState::Editing | ScreenState::Results => Duration::from_millis(100),
        }
    }

    /// Update playback and the message timer (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.screen == ScreenState::Playback {
            if let Some(playback) = &mut self.playback {
                playback.tick();
            }
        }
    }

    /// Show a temporary status message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen {
            ScreenState::Editing => self.handle_editing_key(key),
            ScreenState::Playback => self.handle_playback_key(key),
            ScreenState::Results => self.handle_results_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.apply_mode(),
            KeyCode::Char('s') => self.mode = Mode::SetStart,
            KeyCode::Char('e') => self.mode = Mode::SetEnd,
            KeyCode::Char('w') => self.mode = Mode::ToggleWall,
            KeyCode::Tab | KeyCode::Char('a') => self.cycle_algorithm(1),
            KeyCode::BackTab => self.cycle_algorithm(-1),
            KeyCode::Char('v') => self.run_solve(false),
            KeyCode::Char('p') => self.run_solve(true),
            KeyCode::Char('c') => self.grid.clear_transient(),
            KeyCode::Char('x') => self.reset_grid(),
            KeyCode::Char('r') => self.scatter_walls(),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('m') => self.open_results(),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_playback_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(playback) = &mut self.playback {
                    if playback.manual {
                        playback.advance();
                    }
                }
            }
            KeyCode::Esc | KeyCode::Char('c') => self.finish_playback(),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('c') => self.clear_results(),
            KeyCode::Esc | KeyCode::Char('m') => self.screen = ScreenState::Editing,
            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        if let Some(next) = self.grid.step(self.cursor.0, self.cursor.1, (dr, dc)) {
            self.cursor = next;
        }
    }

    fn apply_mode(&mut self) {
        let (row, col) = self.cursor;
        match self.mode {
            Mode::SetStart => self.grid.set_start(row, col),
            Mode::SetEnd => self.grid.set_end(row, col),
            Mode::ToggleWall => self.grid.toggle_wall(row, col),
        }
    }

    fn cycle_algorithm(&mut self, step: isize) {
        let len = Algorithm::all().len() as isize;
        let next = (self.algorithm_index as isize + step).rem_euclid(len);
        self.algorithm_index = next as usize;
    }

    fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % 3;
        self.theme = match self.theme_index {
            0 => Theme::dark(),
            1 => Theme::light(),
            _ => Theme::high_contrast(),
        };
    }

    /// Run the selected strategy over the current grid and start playback.
    pub fn run_solve(&mut self, manual: bool) {
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            self.show_message("Place a start and an end cell first");
            return;
        };

        self.grid.clear_transient();

        let algorithm = self.algorithm();
        let solver = algorithm.solver();
        let started = Instant::now();
        match solver.solve(&self.grid, start, end) {
            Ok(result) => {
                let elapsed = started.elapsed();
                log::debug!(
                    "{} visited {} cells, route {} cells in {:?}",
                    algorithm,
                    result.visited.len(),
                    result.path.len(),
                    elapsed
                );
                if result.path.is_empty() {
                    self.show_message("No route between start and end");
                } else {
                    let record =
                        SolveRecord::new(algorithm, result.path.len(), elapsed.as_nanos() as u64);
                    if let Err(e) = self.store.save(record) {
                        self.show_message(&format!("Could not record result: {}", e));
                    }
                }
                self.playback = Some(Playback::new(result, manual));
                self.screen = ScreenState::Playback;
            }
            Err(e) => self.show_message(&e.to_string()),
        }
    }

    /// Leave playback, tagging the route on the grid so it stays visible.
    fn finish_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            self.grid.apply_path(&playback.path);
        }
        self.screen = ScreenState::Editing;
    }

    fn reset_grid(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.show_message("Grid cleared");
    }

    /// Turn a fraction of the empty cells into walls.
    fn scatter_walls(&mut self) {
        self.grid.clear_transient();
        let mut rng = rand::thread_rng();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let cell = self.grid.cell_mut(row, col);
                if cell.state == maze_core::CellState::Empty && rng.gen_bool(WALL_DENSITY) {
                    cell.state = maze_core::CellState::Wall;
                }
            }
        }
    }

    fn open_results(&mut self) {
        match self.store.find_all() {
            Ok(records) => {
                self.records = records;
                self.screen = ScreenState::Results;
            }
            Err(e) => self.show_message(&format!("Could not read results: {}", e)),
        }
    }

    fn clear_results(&mut self) {
        match self.store.clear() {
            Ok(()) => {
                self.records.clear();
                self.show_message("Results cleared");
            }
            Err(e) => self.show_message(&format!("Could not clear results: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MemoryResultStore;
    use crossterm::event::KeyModifiers;
    use maze_core::CellState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(
            Grid::new(5, 5),
            Box::new(MemoryResultStore::new()),
            Theme::dark(),
        )
    }

    #[test]
    fn modes_switch_and_apply_at_the_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.mode, Mode::SetStart);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.grid.cell(0, 0).state, CellState::Start);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.cursor, (1, 1));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.grid.cell(1, 1).state, CellState::End);

        app.handle_key(key(KeyCode::Char('w')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.grid.cell(2, 1).state, CellState::Wall);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.grid.cell(2, 1).state, CellState::Empty);
    }

    #[test]
    fn cursor_stays_inside_the_grid() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor, (4, 4));
    }

    #[test]
    fn algorithm_selector_cycles() {
        let mut app = app();
        let first = app.algorithm();
        app.handle_key(key(KeyCode::Tab));
        assert_ne!(app.algorithm(), first);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.algorithm(), first);
    }

    #[test]
    fn solve_without_endpoints_shows_a_message() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('v')));
        assert_eq!(app.screen, ScreenState::Editing);
        assert!(app.message.as_deref().unwrap().contains("start"));
    }

    #[test]
    fn solve_records_a_metric_and_enters_playback() {
        let mut app = app();
        app.grid.set_start(0, 0);
        app.grid.set_end(4, 4);
        app.handle_key(key(KeyCode::Char('v')));

        assert_eq!(app.screen, ScreenState::Playback);
        let records = app.store.find_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].algorithm, app.algorithm().to_string());
        assert_eq!(records[0].path_len, 9);
    }

    #[test]
    fn unsolvable_grid_is_a_message_not_an_error() {
        let mut app = app();
        app.grid.set_start(0, 0);
        app.grid.set_end(4, 4);
        for col in 0..5 {
            app.grid.toggle_wall(2, col);
        }
        app.handle_key(key(KeyCode::Char('v')));

        // Playback of the explored cells still runs; nothing was recorded.
        assert_eq!(app.screen, ScreenState::Playback);
        assert!(app.message.as_deref().unwrap().contains("No route"));
        assert!(app.store.find_all().unwrap().is_empty());
    }

    #[test]
    fn manual_playback_advances_per_keypress() {
        let mut app = app();
        app.grid.set_start(0, 0);
        app.grid.set_end(0, 4);
        app.handle_key(key(KeyCode::Char('p')));

        let shown = |app: &App| {
            let p = app.playback.as_ref().unwrap();
            (p.shown_visited, p.shown_path)
        };
        assert_eq!(shown(&app), (0, 0));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(shown(&app), (1, 0));

        let total = {
            let p = app.playback.as_ref().unwrap();
            p.visited.len() + p.path.len()
        };
        for _ in 1..total {
            app.handle_key(key(KeyCode::Char(' ')));
        }
        assert!(app.playback.as_ref().unwrap().finished());
    }

    #[test]
    fn leaving_playback_tags_the_route() {
        let mut app = app();
        app.grid.set_start(0, 0);
        app.grid.set_end(0, 4);
        app.handle_key(key(KeyCode::Char('v')));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.screen, ScreenState::Editing);
        assert_eq!(app.grid.cell(0, 1).state, CellState::Path);
        // Start and end keep their own states.
        assert_eq!(app.grid.cell(0, 0).state, CellState::Start);

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.grid.cell(0, 1).state, CellState::Empty);
    }

    #[test]
    fn results_screen_loads_and_clears_records() {
        let mut app = app();
        app.grid.set_start(0, 0);
        app.grid.set_end(0, 4);
        app.handle_key(key(KeyCode::Char('v')));
        app.handle_key(key(KeyCode::Esc));

        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.screen, ScreenState::Results);
        assert_eq!(app.records.len(), 1);

        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.records.is_empty());
        assert!(app.store.find_all().unwrap().is_empty());

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, ScreenState::Editing);
    }
}
