//! Tic-tac-toe domain: board, rules and the game engine.

mod action;
mod game;
pub mod invariants;
mod lines;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, Transition};
pub use lines::WinLine;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
