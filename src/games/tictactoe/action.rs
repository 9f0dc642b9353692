//! Inbound events and placement errors.
//!
//! Input from the presentation layer arrives as a [`GameEvent`] value
//! rather than a per-cell callback, so every input path goes through
//! the same dispatch.

use super::Position;
use serde::{Deserialize, Serialize};

/// An input event forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell was clicked (row-major index 0-8).
    CellClicked(usize),
    /// The player asked to begin the first game.
    StartRequested,
    /// The player asked to start over after a game.
    ResetRequested,
}

impl From<Position> for GameEvent {
    fn from(pos: Position) -> Self {
        GameEvent::CellClicked(pos.to_index())
    }
}

/// Reason a placement was ignored.
///
/// None of these are failures of the session; they explain a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// Input arrived before the game was started.
    #[display("Game has not started")]
    NotStarted,

    /// Index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The current game already ended.
    #[display("Game is already over")]
    GameOver,
}
