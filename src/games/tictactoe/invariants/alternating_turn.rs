//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns, O first.
///
/// Consequently O holds as many marks as X or exactly one more. While the
/// game is in progress the turn belongs to the player who did not make
/// the last move; after it ends the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::FIRST
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let o = game.board().count(Player::O);
        let x = game.board().count(Player::X);
        if o < x || o - x > 1 {
            return false;
        }

        let expected = match history.last() {
            None => Player::FIRST,
            Some(last) if game.is_over() => last.player,
            Some(last) => last.player.opponent(),
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("Valid replay");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::replay(&[Position::TopLeft]).expect("Valid replay");
        game.history.push(Move::new(Player::O, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut game = Game::new();
        game.turn = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
