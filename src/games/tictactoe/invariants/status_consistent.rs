//! Status consistency invariant: the recorded status agrees with the board.

use super::super::rules::{check_winner, is_full};
use super::super::{Game, GameStatus};
use super::Invariant;

/// Invariant: Status is what the rules say about the board.
///
/// A complete line means `Won` with that player and line (win takes
/// precedence), otherwise a full board means `Drawn`, otherwise
/// `InProgress`.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let expected = match check_winner(game.board()) {
            Some((player, line)) => GameStatus::Won { player, line },
            None if is_full(game.board()) => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        *game.status() == expected
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_won_game_holds() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .expect("Valid replay");
        assert!(game.is_over());
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_premature_status_violates() {
        let mut game = Game::new();
        game.status = GameStatus::Drawn;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
