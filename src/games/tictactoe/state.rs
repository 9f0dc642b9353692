//! Session game state: board, turn, score and the start gate.

use super::action::{GameEvent, PlaceError};
use super::invariants::assert_invariants;
use super::rules;
use super::{Board, Cell, GameStatus, Player, Position, Score};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete state of one session.
///
/// Created once at startup and owned by the presentation layer.
/// [`GameState::reset_board`] starts a new game while keeping the score.
///
/// Only `Serialize` is derived: a status always comes from placements on
/// the board it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    score: Score,
    started: bool,
    status: GameStatus,
}

impl GameState {
    /// Creates a session that has not started yet.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            score: Score::new(),
            started: false,
            status: GameStatus::InProgress,
        }
    }

    /// Opens the board for input.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if !self.started {
            info!("Game started");
        }
        self.started = true;
    }

    /// Places the current player's mark at `index`.
    ///
    /// Invalid input is ignored: before start, out of range, on an
    /// occupied cell, or after the game ended. Returns the status after
    /// the call either way.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, index: usize) -> GameStatus {
        match self.try_place(index) {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "Placement ignored");
                self.status
            }
        }
    }

    /// Same as [`GameState::place`], reporting why an input was ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError`] naming the rejected precondition. The
    /// state is unchanged in that case.
    pub fn try_place(&mut self, index: usize) -> Result<GameStatus, PlaceError> {
        if !self.started {
            return Err(PlaceError::NotStarted);
        }
        if self.status.is_terminal() {
            return Err(PlaceError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(PlaceError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(PlaceError::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Cell::from(player));
        self.current_player = player.opponent();
        debug!(%player, position = %pos, "Mark placed");

        let status = self.evaluate_terminal();
        assert_invariants(self);
        Ok(status)
    }

    /// Checks the board for a win or a draw.
    ///
    /// The first of the 8 lines (rows, then columns, then diagonals) with
    /// three equal marks decides the winner, whose score goes up by one.
    /// A full board without such a line is a draw. Once a result has been
    /// recorded it is returned as-is, so a win is never counted twice.
    #[instrument(skip(self))]
    pub fn evaluate_terminal(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        if let Some(winner) = rules::check_winner(&self.board) {
            self.score.record_win(winner);
            self.status = GameStatus::Won(winner);
            info!(%winner, score = %self.score, "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!(score = %self.score, "Game drawn");
        }
        self.status
    }

    /// Clears the board for a new game, X to move.
    ///
    /// The session score carries over. Whether "start over" should also
    /// zero the score is an open product decision; the carry-over is kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.started = true;
        info!(score = %self.score, "Board reset");
    }

    /// Routes an input event to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> GameStatus {
        match event {
            GameEvent::CellClicked(index) => self.place(index),
            GameEvent::StartRequested => {
                self.start();
                self.status
            }
            GameEvent::ResetRequested => {
                self.reset_board();
                self.status
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at a row-major index, `None` past index 8.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.board.cell(index)
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Wins recorded for `player` this session.
    pub fn score_of(&self, player: Player) -> u32 {
        self.score.of(player)
    }

    /// Returns the session score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the status of the current game.
    pub fn terminal_status(&self) -> GameStatus {
        self.status
    }

    /// Whether input is accepted.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cells of the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if self.status.winner().is_some() {
            rules::winning_line(&self.board).map(|(_, line)| line)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
