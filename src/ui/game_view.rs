use crate::game::{Board, Cell, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Resolved display colors for the two players, in player order.
pub type PlayerColors = [Color; 2];

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    colors: PlayerColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, colors, chunks[0]);
    render_board(frame, game_state.board(), selected_column, colors, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(cell: Cell, colors: PlayerColors) -> Color {
    match cell {
        Cell::Empty => Color::DarkGray,
        Cell::One => colors[0],
        Cell::Two => colors[1],
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    colors: PlayerColors,
    area: ratatui::layout::Rect,
) {
    let current_player = game_state.current_player();
    let color = match current_player {
        Player::One => colors[0],
        Player::Two => colors[1],
    };

    let status = if game_state.is_terminal() {
        "Game Over".to_string()
    } else {
        format!(
            "Current: {} ({})",
            current_player.name(),
            game_state.color_of(current_player)
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    colors: PlayerColors,
    area: ratatui::layout::Rect,
) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("  ")]; // Padding to match the border
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!(" ╔{}╗", "═".repeat(3 * width))));

    // Board rows
    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw(" ║")];

        for col in 0..width {
            let cell = board.get(row, col);
            let symbol = match cell {
                Cell::Empty => " . ",
                Cell::One | Cell::Two => " ● ",
            };
            row_spans.push(Span::styled(
                symbol,
                Style::default().fg(piece_color(cell, colors)),
            ));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!(" ╚{}╝", "═".repeat(3 * width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("  ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/Space: Drop  |  R: New Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
