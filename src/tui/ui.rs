//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Position, WinLine};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen and returns the area of each cell.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);

    frame.render_widget(status(app), chunks[2]);

    let help = Paragraph::new("1-9/click: play  arrows+enter: select  r: reset  n: new game  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

/// Outcome banner when visible, otherwise whose turn it is.
fn status(app: &App) -> Paragraph<'static> {
    let screen = app.screen();
    let mut spans = match screen.banner() {
        Some(banner) => vec![Span::styled(
            banner.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )],
        None => vec![Span::styled(
            format!("Player {}'s turn", app.turn()),
            Style::default().fg(Color::Yellow),
        )],
    };
    if let Some(line) = screen.win_line() {
        spans.push(Span::styled(
            format!("  [{} {}]", line, glyph(line)),
            Style::default().fg(Color::Green),
        ));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Stroke drawn through the cells of a winning line.
fn glyph(line: WinLine) -> &'static str {
    match line {
        WinLine::Row0 | WinLine::Row1 | WinLine::Row2 => "─",
        WinLine::Col0 | WinLine::Col1 | WinLine::Col2 => "│",
        WinLine::Diag0 => "╲",
        WinLine::Diag1 => "╱",
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                areas[pos.to_index()] = cols[col * 2];
                draw_cell(frame, cols[col * 2], app, pos);
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let view = app.screen().cell(pos);
    let on_line = app.screen().win_line().is_some_and(|line| line.contains(pos));

    let (symbol, mut style) = match view.style {
        Some(player_style) => (
            view.text.to_string(),
            Style::default()
                .fg(app.palette().color(player_style))
                .add_modifier(Modifier::BOLD),
        ),
        // Empty cells show their digit key while they still accept input.
        None if view.enabled => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (String::new(), Style::default()),
    };

    if on_line {
        style = style.bg(Color::Green);
    }
    if pos == app.cursor() && view.enabled {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::tui::input::Input;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> (String, [Rect; 9]) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut areas = [Rect::default(); 9];
        terminal
            .draw(|frame| areas = draw(frame, app))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, areas)
    }

    #[test]
    fn test_shows_turn_while_in_progress() {
        let app = App::new(&GameConfig::default());
        let (text, _) = render(&app);
        assert!(text.contains("Player O's turn"));
    }

    #[test]
    fn test_shows_banner_and_win_line() {
        let mut app = App::new(&GameConfig::default());
        for i in [0, 3, 1, 4, 2] {
            app.handle(Input::Cell(i));
        }
        let (text, _) = render(&app);
        assert!(text.contains("Player O Wins!"));
        assert!(text.contains("row-0"));
    }

    #[test]
    fn test_cell_areas_are_distinct_and_ordered() {
        let app = App::new(&GameConfig::default());
        let (_, areas) = render(&app);
        assert!(areas.iter().all(|a| a.width > 0 && a.height > 0));
        assert!(areas[0].x < areas[1].x && areas[1].x < areas[2].x);
        assert!(areas[0].y < areas[3].y && areas[3].y < areas[6].y);
    }
}
