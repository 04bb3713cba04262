//! The eight winning lines of the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A winning line: three rows, three columns, two diagonals.
///
/// Declaration order is the scan order used by win detection and
/// matches the indicator identifiers `row-0` through `diag-1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    #[display("row-0")]
    #[serde(rename = "row-0")]
    Row0,
    /// Cells 3, 4, 5.
    #[display("row-1")]
    #[serde(rename = "row-1")]
    Row1,
    /// Cells 6, 7, 8.
    #[display("row-2")]
    #[serde(rename = "row-2")]
    Row2,
    /// Cells 0, 3, 6.
    #[display("col-0")]
    #[serde(rename = "col-0")]
    Col0,
    /// Cells 1, 4, 7.
    #[display("col-1")]
    #[serde(rename = "col-1")]
    Col1,
    /// Cells 2, 5, 8.
    #[display("col-2")]
    #[serde(rename = "col-2")]
    Col2,
    /// Cells 0, 4, 8.
    #[display("diag-0")]
    #[serde(rename = "diag-0")]
    Diag0,
    /// Cells 2, 4, 6.
    #[display("diag-1")]
    #[serde(rename = "diag-1")]
    Diag1,
}

impl WinLine {
    /// All lines in scan order.
    pub const ALL: [WinLine; 8] = [
        WinLine::Row0,
        WinLine::Row1,
        WinLine::Row2,
        WinLine::Col0,
        WinLine::Col1,
        WinLine::Col2,
        WinLine::Diag0,
        WinLine::Diag1,
    ];

    /// The three positions forming this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinLine::Row0 => [TopLeft, TopCenter, TopRight],
            WinLine::Row1 => [MiddleLeft, Center, MiddleRight],
            WinLine::Row2 => [BottomLeft, BottomCenter, BottomRight],
            WinLine::Col0 => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::Col1 => [TopCenter, Center, BottomCenter],
            WinLine::Col2 => [TopRight, MiddleRight, BottomRight],
            WinLine::Diag0 => [TopLeft, Center, BottomRight],
            WinLine::Diag1 => [TopRight, Center, BottomLeft],
        }
    }

    /// The line as board indices.
    pub fn indices(self) -> [usize; 3] {
        self.cells().map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}
