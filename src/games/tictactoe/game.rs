//! Game engine for tic-tac-toe.
//!
//! `Game` owns board, turn, status and history. Its only mutation
//! paths are [`Game::make_move`] and [`Game::reset`]; the win check
//! always runs before the draw check.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::{Board, GameStatus, Player, Position, Square, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of an accepted move - explicit state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Game continues with `next` to move.
    Continued {
        /// Player now to move.
        next: Player,
    },
    /// The move completed `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// The move filled the board without a winner.
    Drawn,
}

/// Tic-tac-toe game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with O to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.make_move(*pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is won this stays on the winner.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    ///
    /// On error the game is left untouched.
    #[instrument(skip(self), fields(position = %pos, player = %self.turn))]
    pub fn make_move(&mut self, pos: Position) -> Result<Transition, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let transition = if let Some((winner, line)) = check_winner(&self.board) {
            self.status = GameStatus::Won {
                player: winner,
                line,
            };
            Transition::Won {
                player: winner,
                line,
            }
        } else if is_full(&self.board) {
            self.status = GameStatus::Drawn;
            Transition::Drawn
        } else {
            self.turn = player.opponent();
            Transition::Continued { next: self.turn }
        };

        debug!(?transition, "Move applied");
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );
        Ok(transition)
    }

    /// Places a mark by board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`Game::make_move`].
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, index: usize) -> Result<Transition, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(pos)
    }

    /// Restores the initial state: empty board, O to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_flips_on_continued_move() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Player::O);
        let t = game.make_move(Position::Center).unwrap();
        assert_eq!(t, Transition::Continued { next: Player::X });
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut game = Game::new();
        assert_eq!(game.make_move_at(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_win_keeps_turn_on_winner() {
        let mut game = Game::new();
        for i in [0, 3, 1, 4] {
            game.make_move_at(i).unwrap();
        }
        let t = game.make_move_at(2).unwrap();
        assert_eq!(
            t,
            Transition::Won {
                player: Player::O,
                line: WinLine::Row0
            }
        );
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.make_move_at(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winning_last_move_is_not_a_draw() {
        // O fills the ninth square and completes the main diagonal.
        let positions = [0, 1, 2, 5, 3, 6, 4, 7];
        let mut game = Game::new();
        for i in positions {
            game.make_move_at(i).unwrap();
        }
        let t = game.make_move_at(8).unwrap();
        assert_eq!(
            t,
            Transition::Won {
                player: Player::O,
                line: WinLine::Diag0
            }
        );
        assert_eq!(game.board().filled(), 9);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::replay(&[Position::TopLeft, Position::Center]).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }
}
