mod app;
mod metrics;
mod render;
mod theme;

use app::{App, MIN_DIMENSION};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use maze_core::{Algorithm, Grid};
use metrics::{FileResultStore, ResultStore, SolveRecord};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use theme::Theme;

/// Paint a maze and watch pathfinding strategies solve it
#[derive(Parser, Debug)]
#[command(name = "maze", version, about)]
struct Args {
    /// Grid rows (must be greater than 4)
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Grid columns (must be greater than 4)
    #[arg(long, default_value_t = 16)]
    cols: usize,

    /// Where solve metrics are recorded
    #[arg(long)]
    results_file: Option<PathBuf>,

    /// Color theme: dark, light or high-contrast
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Solve a maze layout file and exit without the TUI
    #[arg(long)]
    headless: bool,

    /// Strategy used by --headless
    #[arg(long, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// Maze layout file for --headless (`.` empty, `#` wall, `S` start, `E` end)
    #[arg(long)]
    maze: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = match &args.results_file {
        Some(path) => FileResultStore::new(path.clone()),
        None => FileResultStore::default(),
    };

    if args.headless {
        return run_headless(&args, &store);
    }

    if args.rows < MIN_DIMENSION || args.cols < MIN_DIMENSION {
        eprintln!("Grid dimensions must be greater than 4");
        std::process::exit(2);
    }

    let theme = match args.theme.as_str() {
        "light" => Theme::light(),
        "high-contrast" => Theme::high_contrast(),
        _ => Theme::dark(),
    };

    let mut app = App::new(Grid::new(args.rows, args.cols), Box::new(store), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.tick_rate();

        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for playback updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Solve a maze file on the command line, print the outcome, record the metric.
fn run_headless(args: &Args, store: &FileResultStore) -> io::Result<()> {
    let Some(maze_path) = &args.maze else {
        eprintln!("--headless needs --maze FILE");
        std::process::exit(2);
    };

    let layout = std::fs::read_to_string(maze_path)?;
    let grid = match Grid::from_string(&layout) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}: {}", maze_path.display(), e);
            std::process::exit(2);
        }
    };
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        eprintln!("{}: layout needs an S and an E cell", maze_path.display());
        std::process::exit(2);
    };

    let algorithm = args.algorithm;
    let solver = algorithm.solver();
    let started = Instant::now();
    let result = match solver.solve(&grid, start, end) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let elapsed = started.elapsed();
    log::info!(
        "{} explored {} cells in {:?}",
        algorithm,
        result.visited.len(),
        elapsed
    );

    if result.path.is_empty() {
        println!(
            "{}: no route ({} cells explored)",
            algorithm,
            result.visited.len()
        );
        return Ok(());
    }

    let record = SolveRecord::new(algorithm, result.path.len(), elapsed.as_nanos() as u64);
    if let Err(e) = store.save(record) {
        log::warn!("could not record result: {}", e);
    }

    let mut solved = grid.clone();
    solved.apply_path(&result.path);
    println!(
        "{}: route of {} cells, {} explored, {}",
        algorithm,
        result.path.len(),
        result.visited.len(),
        metrics::format_time_ns(elapsed.as_nanos() as u64)
    );
    print!("{}", solved);

    Ok(())
}
