//! Tic-tac-toe library - game engine, controller and terminal front-end
//!
//! Two players, O and X, take turns marking a 3x3 board; O always opens.
//!
//! # Architecture
//!
//! - **Games**: pure tic-tac-toe rules and engine ([`Game`])
//! - **Surface**: the presentation trait the game is projected onto
//! - **Controller**: binds cell clicks and resets to the engine and
//!   updates the surface ([`GameController`])
//! - **TUI**: a ratatui front-end driving the controller
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, GameStatus, Player, ScreenState, WinLine};
//!
//! let mut controller = GameController::new(ScreenState::new());
//! for cell in [0, 3, 1, 4, 2] {
//!     controller.apply_move(cell);
//! }
//! assert_eq!(
//!     controller.game().status(),
//!     &GameStatus::Won { player: Player::O, line: WinLine::Row0 }
//! );
//! assert_eq!(controller.surface().banner(), Some("Player O Wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod replay;
mod surface;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Controller
pub use controller::{GameController, GameSnapshot};

// Crate-level exports - Presentation surface
pub use surface::{CellStyle, CellView, ScreenState, Surface};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Move, MoveError, Player, Position, Square, Transition, WinLine,
    invariants, rules,
};

// Crate-level exports - Front-ends
pub use replay::{replay, report, report_json};
pub use tui::run_tui;
