//! Tests for the pure game engine and its invariants.

use tictactoe::invariants::{GameInvariants, InvariantSet};
use tictactoe::rules::{check_winner, is_draw};
use tictactoe::{Game, GameStatus, MoveError, Player, Position, Transition, WinLine};

#[test]
fn test_valid_moves_shrink_as_board_fills() {
    let game = Game::replay(&[Position::TopLeft, Position::Center]).unwrap();
    let valid = Position::valid_moves(game.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
}

#[test]
fn test_replay_stops_at_first_error() {
    let err = Game::replay(&[Position::Center, Position::Center]).unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    assert_eq!(err.to_string(), "Square Center is already occupied");
}

#[test]
fn test_game_over_rejects_moves() {
    let mut game = Game::new();
    for i in [0, 3, 1, 4, 2] {
        game.make_move_at(i).unwrap();
    }
    assert!(game.is_over());
    assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(check_winner(game.board()), Some((Player::O, WinLine::Row0)));
}

#[test]
fn test_draw_transition() {
    let mut game = Game::new();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6];
    for i in moves {
        assert!(matches!(
            game.make_move_at(i),
            Ok(Transition::Continued { .. })
        ));
    }
    assert_eq!(game.make_move_at(8), Ok(Transition::Drawn));
    assert_eq!(game.status(), &GameStatus::Drawn);
    assert!(is_draw(game.board()));
}

#[test]
fn test_invariants_hold_through_a_full_game() {
    let mut game = Game::new();
    for i in [4, 0, 8, 2, 1, 7, 3, 5, 6] {
        game.make_move_at(i).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }
    assert_eq!(game.status(), &GameStatus::Drawn);
}
