//! Presentation surface the game controller projects onto.
//!
//! A surface is write-only from the controller's point of view: it is told
//! what each cell shows, whether the outcome banner is visible, and which
//! win line (if any) to highlight. [`ScreenState`] keeps that projection
//! in memory for renderers and tests.

use crate::games::tictactoe::{Player, Position, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player-specific visual style of an occupied cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum CellStyle {
    /// Marked by player O.
    #[display("player-o")]
    PlayerO,
    /// Marked by player X.
    #[display("player-x")]
    PlayerX,
}

impl From<Player> for CellStyle {
    fn from(player: Player) -> Self {
        match player {
            Player::O => CellStyle::PlayerO,
            Player::X => CellStyle::PlayerX,
        }
    }
}

/// What a single cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Display value: `""`, `"O"` or `"X"`.
    pub text: &'static str,
    /// Whether the cell accepts clicks.
    pub enabled: bool,
    /// Player style, absent for empty cells.
    pub style: Option<CellStyle>,
}

impl CellView {
    /// An empty, clickable cell.
    pub const EMPTY: CellView = CellView {
        text: "",
        enabled: true,
        style: None,
    };

    /// A cell marked by `player`; occupied cells never accept clicks.
    pub fn occupied(player: Player) -> Self {
        Self {
            text: player.symbol(),
            enabled: false,
            style: Some(player.into()),
        }
    }

    /// The same cell with clicks disabled.
    pub fn locked(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Output side of the game: everything the controller can change on screen.
///
/// The win-line methods default to no-ops so a surface without an
/// indicator only implements the cell and banner methods.
pub trait Surface {
    /// Shows `view` in the cell at `position`.
    fn render_cell(&mut self, position: Position, view: CellView);

    /// Shows the outcome banner with `message`.
    fn show_outcome(&mut self, message: &str);

    /// Hides the outcome banner and clears its text.
    fn hide_outcome(&mut self);

    /// Reveals the indicator for `line`.
    fn show_win_line(&mut self, _line: WinLine) {}

    /// Hides the win-line indicator.
    fn hide_win_line(&mut self) {}
}

/// In-memory projection of the board, banner and win line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenState {
    cells: [CellView; 9],
    banner: Option<String>,
    win_line: Option<WinLine>,
    win_line_enabled: bool,
}

impl ScreenState {
    /// Creates a blank screen with the win-line indicator available.
    #[instrument]
    pub fn new() -> Self {
        Self::with_win_line(true)
    }

    /// Creates a blank screen; `enabled = false` drops the win-line indicator.
    #[instrument]
    pub fn with_win_line(enabled: bool) -> Self {
        Self {
            cells: [CellView::EMPTY; 9],
            banner: None,
            win_line: None,
            win_line_enabled: enabled,
        }
    }

    /// The view of a single cell.
    pub fn cell(&self, position: Position) -> CellView {
        self.cells[position.to_index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// The banner text while visible.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The highlighted win line while visible.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ScreenState {
    fn render_cell(&mut self, position: Position, view: CellView) {
        self.cells[position.to_index()] = view;
    }

    fn show_outcome(&mut self, message: &str) {
        debug!(message, "Showing outcome banner");
        self.banner = Some(message.to_string());
    }

    fn hide_outcome(&mut self) {
        self.banner = None;
    }

    fn show_win_line(&mut self, line: WinLine) {
        if self.win_line_enabled {
            debug!(%line, "Showing win line");
            self.win_line = Some(line);
        }
    }

    fn hide_win_line(&mut self) {
        self.win_line = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_view() {
        let view = CellView::occupied(Player::X);
        assert_eq!(view.text, "X");
        assert!(!view.enabled);
        assert_eq!(view.style.map(|s| s.to_string()).as_deref(), Some("player-x"));
    }

    #[test]
    fn test_disabled_win_line_is_a_no_op() {
        let mut screen = ScreenState::with_win_line(false);
        screen.show_win_line(WinLine::Diag0);
        assert_eq!(screen.win_line(), None);
    }

    #[test]
    fn test_banner_show_hide() {
        let mut screen = ScreenState::new();
        screen.show_outcome("Match Drawn!");
        assert_eq!(screen.banner(), Some("Match Drawn!"));
        screen.hide_outcome();
        assert_eq!(screen.banner(), None);
    }
}
