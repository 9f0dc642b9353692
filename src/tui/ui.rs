//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, INSTRUCTIONS, Screen};
use crate::games::tictactoe::{Cell, GameState, Position};

/// Draws the screen matching the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Start => draw_start(frame, app),
        Screen::Playing => draw_game(frame, app),
        Screen::GameOver => {
            draw_game(frame, app);
            draw_game_over(frame, app);
        }
    }
}

fn draw_start(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Instructions
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Welcome to Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if app.show_instructions() {
        let instructions = Paragraph::new(INSTRUCTIONS)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(instructions, chunks[1]);
    }

    let help = Paragraph::new("Enter/S: Start Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Turn + score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let stats = Paragraph::new(vec![
        Line::from(app.turn_label()),
        Line::from(app.score_label()),
    ])
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(stats, chunks[0]);

    draw_board(frame, chunks[1], app.state(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows + Enter or 1-9: Move | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_game_over(frame: &mut Frame, app: &App) {
    let area = center_rect(frame.area(), 34, 7);
    let text = vec![
        Line::from(Span::styled(
            app.state().terminal_status().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(app.final_score_label()),
        Line::from(""),
        Line::from("R/Enter: Start Over | Q: Quit"),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: Position) {
    let board_area = center_rect(area, 29, 11);
    let highlight = state.winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let winning = highlight.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, cells[col * 2], state, pos, pos == cursor, winning);
            }
            if col < 2 {
                draw_separator_vertical(frame, cells[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    pos: Position,
    under_cursor: bool,
    winning: bool,
) {
    let cell = state.board().get(pos);

    let (symbol, base_style) = match cell {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::X => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if under_cursor && !state.terminal_status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────┼─────────┼─────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
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
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_start_screen_renders_welcome() {
        let app = App::new(true);
        let screen = render(&app);
        assert!(screen.contains("Welcome to Tic Tac Toe"));
        assert!(screen.contains("Instructions:"));
    }

    #[test]
    fn test_game_screen_renders_labels() {
        let mut app = App::new(false);
        app.handle(Action::Start);
        let screen = render(&app);
        assert!(screen.contains("Turn: X"));
        assert!(screen.contains("Score: X - 0 | O - 0"));
    }

    #[test]
    fn test_game_over_renders_popup() {
        let mut app = App::new(false);
        app.handle(Action::Start);
        for index in [0, 1, 3, 2, 6] {
            if let Some(pos) = Position::from_index(index) {
                app.handle(Action::PlaceAt(pos));
            }
        }
        let screen = render(&app);
        assert!(screen.contains("X wins!"));
        assert!(screen.contains("Final Scores: X - 1 | O - 0"));
    }
}
