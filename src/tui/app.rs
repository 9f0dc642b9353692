//! Application state and logic.

use crate::games::tictactoe::{GameEvent, GameState, GameStatus, Position};
use tracing::debug;

use super::input::{Action, move_cursor};

/// Rules shown on the start screen.
pub const INSTRUCTIONS: &str = "Instructions:
- The game is played on a 3x3 grid.
- Player X and Player O take turns marking the spaces.
- The player who succeeds in placing three of their marks in a horizontal, \
vertical, or diagonal row wins the game.
- If all 9 spaces are filled and no player has achieved a winning pattern, \
the game is a draw.";

/// Which screen the front end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome and instructions, before the first game.
    Start,
    /// Board accepting moves.
    Playing,
    /// Result and final scores, offering to start over.
    GameOver,
}

/// Main application state.
///
/// Owns the session's [`GameState`]; everything else here is view state.
pub struct App {
    state: GameState,
    cursor: Position,
    show_instructions: bool,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(show_instructions: bool) -> Self {
        Self::with_state(GameState::new(), show_instructions)
    }

    /// Creates an application around an existing session.
    pub fn with_state(state: GameState, show_instructions: bool) -> Self {
        Self {
            state,
            cursor: Position::Center,
            show_instructions,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// Gets the session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the start screen lists the rules.
    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen derived from the session state.
    pub fn screen(&self) -> Screen {
        if !self.state.is_started() {
            Screen::Start
        } else if self.state.terminal_status().is_terminal() {
            Screen::GameOver
        } else {
            Screen::Playing
        }
    }

    /// "Turn: X"
    pub fn turn_label(&self) -> String {
        format!("Turn: {}", self.state.current_player())
    }

    /// "Score: X - 0 | O - 0"
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.state.score())
    }

    /// "Final Scores: X - 1 | O - 0"
    pub fn final_score_label(&self) -> String {
        format!("Final Scores: {}", self.state.score())
    }

    /// Applies a key action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, screen = ?self.screen(), "Handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Start => {
                if self.screen() == Screen::Start {
                    self.send(GameEvent::StartRequested);
                }
            }
            Action::Reset => {
                if self.screen() == Screen::GameOver {
                    self.send(GameEvent::ResetRequested);
                }
            }
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::Select => match self.screen() {
                Screen::Start => self.send(GameEvent::StartRequested),
                Screen::Playing => self.place(self.cursor),
                Screen::GameOver => self.send(GameEvent::ResetRequested),
            },
        }
    }

    fn place(&mut self, pos: Position) {
        match self.state.try_place(pos.to_index()) {
            Ok(GameStatus::InProgress) => self.status_message.clear(),
            Ok(status) => self.status_message = status.to_string(),
            Err(e) => {
                debug!(error = %e, "Placement ignored");
                self.status_message = e.to_string();
            }
        }
    }

    fn send(&mut self, event: GameEvent) {
        self.state.dispatch(event);
        self.cursor = Position::Center;
        self.status_message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Player};
    use crossterm::event::KeyCode;

    #[test]
    fn test_starts_on_start_screen() {
        let mut app = App::new(true);
        assert_eq!(app.screen(), Screen::Start);

        app.handle(Action::PlaceAt(Position::TopLeft));
        assert_eq!(app.state().cell_at(0), Some(Cell::Empty));

        app.handle(Action::Select);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.turn_label(), "Turn: X");
        assert_eq!(app.score_label(), "Score: X - 0 | O - 0");
    }

    #[test]
    fn test_cursor_select_places_mark() {
        let mut app = App::new(false);
        app.handle(Action::Start);
        app.handle(Action::MoveCursor(KeyCode::Up));
        app.handle(Action::Select);
        assert_eq!(app.state().cell_at(1), Some(Cell::X));
        assert_eq!(app.turn_label(), "Turn: O");
    }

    #[test]
    fn test_occupied_cell_sets_message() {
        let mut app = App::new(false);
        app.handle(Action::Start);
        app.handle(Action::PlaceAt(Position::Center));
        app.handle(Action::PlaceAt(Position::Center));
        assert_eq!(app.status_message(), "Cell Center is already occupied");
        assert_eq!(app.state().current_player(), Player::O);
    }

    #[test]
    fn test_win_then_start_over() {
        let mut app = App::new(false);
        app.handle(Action::Start);
        // X: 1 4 7 (left column), O: 2 3
        for key in ['1', '2', '4', '3', '7'] {
            if let Some(action) = super::super::input::action_for(KeyCode::Char(key)) {
                app.handle(action);
            }
        }
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.status_message(), "X wins!");
        assert_eq!(app.final_score_label(), "Final Scores: X - 1 | O - 0");

        // Reset is ignored mid-game but honored here.
        app.handle(Action::Reset);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.state().score_of(Player::X), 1);
        assert_eq!(app.state().cell_at(0), Some(Cell::Empty));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(true);
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
