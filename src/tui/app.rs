//! Application state and logic.

use crate::config::GameConfig;
use crate::controller::GameController;
use crate::games::tictactoe::{Player, Position};
use crate::surface::{CellStyle, ScreenState};
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

use super::input::{self, Input};

/// Mark colors for the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of O marks.
    pub o: Color,
    /// Color of X marks.
    pub x: Color,
}

impl Palette {
    /// Builds the palette from config, falling back per color on bad names.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            o: parse_color(config.o_color(), Color::Red),
            x: parse_color(config.x_color(), Color::Blue),
        }
    }

    /// Color for a cell style.
    pub fn color(&self, style: CellStyle) -> Color {
        match style {
            CellStyle::PlayerO => self.o,
            CellStyle::PlayerX => self.x,
        }
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(name, ?fallback, "Unknown color in config, using fallback");
        fallback
    })
}

/// Main application state.
pub struct App {
    controller: GameController<ScreenState>,
    cursor: Position,
    cell_areas: [Rect; 9],
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            controller: GameController::new(ScreenState::with_win_line(*config.show_win_line())),
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
            palette: Palette::from_config(config),
            should_quit: false,
        }
    }

    /// The on-screen projection of the game.
    pub fn screen(&self) -> &ScreenState {
        self.controller.surface()
    }

    /// The player to move.
    pub fn turn(&self) -> Player {
        self.controller.game().turn()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark colors.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the last frame drew each cell, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Cell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.controller.apply_move(index);
            }
            Input::Confirm => {
                self.controller.apply_move(self.cursor.to_index());
            }
            Input::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Input::Reset | Input::NewGame => self.controller.reset(),
            Input::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handles a left click at a terminal coordinate.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) {
        match input::cell_at(&self.cell_areas, column, row) {
            Some(index) => self.handle(Input::Cell(index)),
            None => debug!("Click outside the board"),
        }
    }
}
