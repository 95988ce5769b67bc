use crate::app::{App, ScreenState};
use crate::metrics::format_time_ns;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use maze_core::CellState;
use std::collections::HashSet;
use std::io;

/// Each grid cell is drawn this many characters wide.
const CELL_WIDTH: u16 = 2;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    match app.screen {
        ScreenState::Editing | ScreenState::Playback => {
            render_maze_screen(stdout, app, term_width, term_height)?
        }
        ScreenState::Results => render_results_screen(stdout, app)?,
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_maze_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    _term_height: u16,
) -> io::Result<()> {
    let grid_width = app.grid.cols() as u16 * CELL_WIDTH + 2;
    let start_x = if term_width > grid_width + 28 {
        (term_width - grid_width - 28) / 2
    } else {
        0
    };
    let start_y = 1;

    render_grid(stdout, app, start_x, start_y)?;

    let info_x = start_x + grid_width + 3;
    render_info_panel(stdout, app, info_x, start_y)?;

    let controls_y = start_y + app.grid.rows() as u16 + 3;
    render_controls(stdout, app, start_x, controls_y)?;

    if let Some(ref msg) = app.message {
        let msg_y = controls_y + 3;
        execute!(
            stdout,
            MoveTo(start_x, msg_y),
            SetBackgroundColor(app.theme.bg),
            SetForegroundColor(app.theme.error),
            Print(msg)
        )?;
    }

    Ok(())
}

/// Cells revealed so far by the current playback, if any.
fn playback_overlay(app: &App) -> (HashSet<(usize, usize)>, HashSet<(usize, usize)>) {
    let mut visited = HashSet::new();
    let mut path = HashSet::new();
    if let Some(playback) = &app.playback {
        for cell in &playback.visited[..playback.shown_visited] {
            visited.insert((cell.row, cell.col));
        }
        for cell in &playback.path[..playback.shown_path] {
            path.insert((cell.row, cell.col));
        }
    }
    (visited, path)
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let (visited, path) = playback_overlay(app);
    let cols = app.grid.cols() as u16;

    let horizontal: String = "-".repeat((cols * CELL_WIDTH) as usize);
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(format!("+{}+", horizontal))
    )?;

    for row in 0..app.grid.rows() {
        let cell_y = y + 1 + row as u16;
        execute!(
            stdout,
            MoveTo(x, cell_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;

        for col in 0..app.grid.cols() {
            let state = app.grid.cell(row, col).state;

            // Start/end always keep their colors; the route overlay wins
            // over the explored overlay, which only dresses open cells.
            let color = match state {
                CellState::Start => theme.start,
                CellState::End => theme.end,
                CellState::Wall => theme.wall,
                CellState::Path => theme.path,
                CellState::Empty => {
                    if path.contains(&(row, col)) {
                        theme.path
                    } else if visited.contains(&(row, col)) {
                        theme.visited
                    } else {
                        theme.empty
                    }
                }
            };

            let is_cursor = app.screen == ScreenState::Editing && app.cursor == (row, col);
            if is_cursor {
                execute!(
                    stdout,
                    SetBackgroundColor(color),
                    SetForegroundColor(contrast_for(color)),
                    Print("[]")
                )?;
            } else {
                execute!(stdout, SetBackgroundColor(color), Print("  "))?;
            }
        }

        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1 + app.grid.rows() as u16),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(format!("+{}+", horizontal))
    )?;

    Ok(())
}

/// A readable foreground on top of the given cell color.
fn contrast_for(color: Color) -> Color {
    match color {
        Color::Rgb { r, g, b } if (r as u16 + g as u16 + b as u16) > 380 => Color::Black,
        _ => Color::White,
    }
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let line = |stdout: &mut io::Stdout, dy: u16, label: &str, value: String, color: Color| {
        execute!(
            stdout,
            MoveTo(x, y + dy),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.info),
            Print(label),
            SetForegroundColor(color),
            Print(value)
        )
    };

    line(stdout, 0, "Mode      ", app.mode.label().to_string(), theme.fg)?;
    line(stdout, 1, "Algorithm ", app.algorithm().to_string(), theme.key)?;
    line(
        stdout,
        2,
        "Grid      ",
        format!("{} x {}", app.grid.rows(), app.grid.cols()),
        theme.fg,
    )?;

    if let Some(playback) = &app.playback {
        let status = if playback.finished() {
            if playback.path.is_empty() {
                "no route".to_string()
            } else {
                format!("route: {} cells", playback.path.len())
            }
        } else {
            format!(
                "exploring {}/{}",
                playback.shown_visited,
                playback.visited.len()
            )
        };
        let color = if playback.finished() && playback.path.is_empty() {
            theme.error
        } else {
            theme.success
        };
        line(stdout, 4, "Solve     ", status, color)?;
        if playback.manual && !playback.finished() {
            line(stdout, 5, "", "space: next step".to_string(), theme.info)?;
        }
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let lines: &[&str] = match app.screen {
        ScreenState::Playback => &["space step (step mode)   esc finish   q quit"],
        _ => &[
            "arrows move   space apply   s/e/w mode   tab algorithm",
            "v solve   p step solve   c clear route   r random walls",
            "x reset   m results   t theme   q quit",
        ],
    };

    for (i, text) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + i as u16),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.info),
            Print(text)
        )?;
    }
    Ok(())
}

fn render_results_screen(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let x = 2;

    execute!(
        stdout,
        MoveTo(x, 1),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print("Recorded results"),
        MoveTo(x, 3),
        SetForegroundColor(theme.info),
        Print(format!(
            "{:<22} {:>10} {:>14}",
            "Algorithm", "Path cells", "Time"
        ))
    )?;

    if app.records.is_empty() {
        execute!(
            stdout,
            MoveTo(x, 5),
            SetForegroundColor(theme.info),
            Print("No solves recorded yet")
        )?;
    }

    for (i, record) in app.records.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, 4 + i as u16),
            SetForegroundColor(theme.fg),
            Print(format!(
                "{:<22} {:>10} {:>14}",
                record.algorithm,
                record.path_len,
                format_time_ns(record.time_ns)
            ))
        )?;
    }

    let footer_y = 6 + app.records.len() as u16;
    execute!(
        stdout,
        MoveTo(x, footer_y),
        SetForegroundColor(theme.info),
        Print("c clear   esc back   q quit")
    )?;

    Ok(())
}
