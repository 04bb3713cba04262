//! The game controller: binds input events to the engine and projects the
//! result onto a [`Surface`].
//!
//! Every input is handled to a defined outcome. Rejected moves (game over,
//! occupied cell, index outside 0-8) are logged at debug level and leave
//! both the game and the surface untouched.

use crate::games::tictactoe::{
    Game, GameStatus, Move, Player, Position, Square, Transition, WinLine,
};
use crate::surface::{CellView, ScreenState, Surface};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Owns the game state and the surface it is shown on.
#[derive(Debug)]
pub struct GameController<S> {
    game: Game,
    surface: S,
}

impl<S: Surface> GameController<S> {
    /// Starts a session on `surface`, which is brought to the initial state.
    #[instrument(skip(surface))]
    pub fn new(surface: S) -> Self {
        let mut controller = Self {
            game: Game::new(),
            surface,
        };
        controller.reset();
        controller
    }

    /// The current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The surface the game is projected onto.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the controller, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handles "cell `index` clicked".
    ///
    /// Returns the transition for an accepted move and `None` when the
    /// click is ignored.
    #[instrument(skip(self), fields(player = %self.game.turn()))]
    pub fn apply_move(&mut self, index: usize) -> Option<Transition> {
        let transition = match self.game.make_move_at(index) {
            Ok(transition) => transition,
            Err(error) => {
                debug!(%error, "Move ignored");
                return None;
            }
        };

        if let Some(last) = self.game.history().last().copied() {
            self.render(last.position);
        }

        match transition {
            Transition::Won { player, line } => {
                info!(%player, %line, "Game won");
                self.surface.show_win_line(line);
                self.finish();
            }
            Transition::Drawn => {
                info!("Game drawn");
                self.finish();
            }
            Transition::Continued { next } => {
                debug!(%next, "Turn passes");
            }
        }

        Some(transition)
    }

    /// Handles "reset requested" (both the reset and new-game triggers).
    ///
    /// Valid from any state, including after a win or draw.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        for pos in Position::ALL {
            self.surface.render_cell(pos, CellView::EMPTY);
        }
        self.surface.hide_outcome();
        self.surface.hide_win_line();
        info!("New game started");
    }

    /// What the cell at `pos` shows for the current board.
    fn view(&self, pos: Position) -> CellView {
        match self.game.board().get(pos) {
            Square::Empty => CellView::EMPTY,
            Square::Occupied(player) => CellView::occupied(player),
        }
    }

    /// Projects a single cell onto the surface.
    fn render(&mut self, pos: Position) {
        let view = self.view(pos);
        self.surface.render_cell(pos, view);
    }

    /// Shows the outcome banner and locks every cell.
    fn finish(&mut self) {
        if let Some(message) = self.game.status().message() {
            self.surface.show_outcome(&message);
        }
        for pos in Position::ALL {
            let view = self.view(pos).locked();
            self.surface.render_cell(pos, view);
        }
    }
}

/// Serializable summary of a session: game state plus what is on screen.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GameSnapshot {
    /// Cell texts in row-major order.
    board: Vec<&'static str>,
    /// Player to move (the winner, once won).
    turn: Player,
    /// Game status.
    status: GameStatus,
    /// Moves played this round.
    history: Vec<Move>,
    /// Visible outcome banner.
    banner: Option<String>,
    /// Visible win-line indicator.
    win_line: Option<WinLine>,
}

impl GameController<ScreenState> {
    /// Captures the game and its on-screen projection.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.surface.cells().iter().map(|c| c.text).collect(),
            turn: self.game.turn(),
            status: *self.game.status(),
            history: self.game.history().to_vec(),
            banner: self.surface.banner().map(str::to_string),
            win_line: self.surface.win_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface without a win-line indicator; records every call.
    #[derive(Default)]
    struct PlainSurface {
        calls: Vec<String>,
    }

    impl Surface for PlainSurface {
        fn render_cell(&mut self, position: Position, view: CellView) {
            self.calls.push(format!("cell {} {:?}", position.to_index(), view.text));
        }

        fn show_outcome(&mut self, message: &str) {
            self.calls.push(format!("show {}", message));
        }

        fn hide_outcome(&mut self) {
            self.calls.push("hide".to_string());
        }
    }

    #[test]
    fn test_new_controller_clears_surface() {
        let controller = GameController::new(PlainSurface::default());
        let calls = &controller.surface().calls;
        assert_eq!(calls.len(), 10);
        assert_eq!(calls[9], "hide");
    }

    #[test]
    fn test_accepted_move_renders_one_cell() {
        let mut controller = GameController::new(PlainSurface::default());
        let before = controller.surface().calls.len();
        controller.apply_move(4);
        let calls = &controller.surface().calls[before..];
        assert_eq!(calls, ["cell 4 \"O\""]);
    }

    #[test]
    fn test_ignored_move_touches_nothing() {
        let mut controller = GameController::new(PlainSurface::default());
        controller.apply_move(4);
        let before = controller.surface().calls.len();
        assert_eq!(controller.apply_move(4), None);
        assert_eq!(controller.apply_move(42), None);
        assert_eq!(controller.surface().calls.len(), before);
    }

    #[test]
    fn test_win_without_indicator_still_shows_banner() {
        let mut controller = GameController::new(PlainSurface::default());
        for i in [0, 3, 1, 4, 2] {
            controller.apply_move(i);
        }
        assert!(
            controller
                .surface()
                .calls
                .contains(&"show Player O Wins!".to_string())
        );
    }

    #[test]
    fn test_snapshot_after_win() {
        let mut controller = GameController::new(ScreenState::new());
        for i in [0, 3, 1, 4, 2] {
            controller.apply_move(i);
        }
        let snapshot = controller.snapshot();
        assert_eq!(
            snapshot.board(),
            &vec!["O", "O", "O", "X", "X", "", "", "", ""]
        );
        assert_eq!(snapshot.banner().as_deref(), Some("Player O Wins!"));
        assert_eq!(snapshot.win_line(), &Some(WinLine::Row0));
        assert_eq!(snapshot.history().len(), 5);
    }
}
