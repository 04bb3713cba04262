//! Headless replay of a click sequence.

use crate::controller::{GameController, GameSnapshot};
use crate::surface::ScreenState;
use tracing::{info, instrument, warn};

/// Feeds `moves` (cell indices) through a fresh controller.
///
/// Ignored clicks are logged and skipped, exactly as in the interactive
/// game.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[usize], show_win_line: bool) -> GameController<ScreenState> {
    let mut controller = GameController::new(ScreenState::with_win_line(show_win_line));
    for (step, &index) in moves.iter().enumerate() {
        if controller.apply_move(index).is_none() {
            warn!(step, index, "Click ignored");
        }
    }
    info!(status = ?controller.game().status(), "Replay finished");
    controller
}

/// Human-readable report: board, then banner or the player to move.
pub fn report(controller: &GameController<ScreenState>) -> String {
    let mut out = controller.game().board().display();
    out.push_str("\n\n");
    match controller.surface().banner() {
        Some(banner) => out.push_str(banner),
        None => out.push_str(&format!("Player {} to move", controller.game().turn())),
    }
    if let Some(line) = controller.surface().win_line() {
        out.push_str(&format!(" ({})", line));
    }
    out
}

/// JSON form of the final snapshot.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn report_json(controller: &GameController<ScreenState>) -> serde_json::Result<String> {
    let snapshot: GameSnapshot = controller.snapshot();
    serde_json::to_string_pretty(&snapshot)
}
