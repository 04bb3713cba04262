//! Keyboard and mouse input mapping.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A discrete input event for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Cell chosen directly (digit key or click), by board index.
    Cell(usize),
    /// Choose the cell under the cursor.
    Confirm,
    /// Move the cursor.
    Cursor(Direction),
    /// Reset control.
    Reset,
    /// New-game control (same effect as reset).
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key to an input event.
///
/// Digits `1`-`9` pick cells 0-8 in reading order.
pub fn from_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Input::Cell(d as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
        KeyCode::Up => Some(Input::Cursor(Direction::Up)),
        KeyCode::Down => Some(Input::Cursor(Direction::Down)),
        KeyCode::Left => Some(Input::Cursor(Direction::Left)),
        KeyCode::Right => Some(Input::Cursor(Direction::Right)),
        KeyCode::Char('r') => Some(Input::Reset),
        KeyCode::Char('n') => Some(Input::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Finds the cell whose screen area contains the terminal coordinate.
pub fn cell_at(areas: &[Rect; 9], column: u16, row: u16) -> Option<usize> {
    areas.iter().position(|area| {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(from_key(KeyCode::Char('1')), Some(Input::Cell(0)));
        assert_eq!(from_key(KeyCode::Char('9')), Some(Input::Cell(8)));
        assert_eq!(from_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_reset_triggers() {
        assert_eq!(from_key(KeyCode::Char('r')), Some(Input::Reset));
        assert_eq!(from_key(KeyCode::Char('n')), Some(Input::NewGame));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_cell_hit_testing() {
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (r, c) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(c * 10, r * 4, 9, 3);
        }
        assert_eq!(cell_at(&areas, 0, 0), Some(0));
        assert_eq!(cell_at(&areas, 15, 5), Some(4));
        assert_eq!(cell_at(&areas, 9, 0), None);
        assert_eq!(cell_at(&areas, 28, 10), Some(8));
    }
}
