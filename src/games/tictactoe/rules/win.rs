//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square, WinLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in table order and the first complete line wins.
/// Returns the player together with that line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}
