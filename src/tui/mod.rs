//! Terminal front-end: the board as selectable cells.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also when the loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, then block on the next input event; one event per iteration.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        let mut areas = [Rect::default(); 9];
        terminal.draw(|frame| areas = ui::draw(frame, app))?;
        app.set_cell_areas(areas);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::from_key(key.code) {
                    Some(input) => app.handle(input),
                    None => debug!(code = ?key.code, "Unbound key"),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
