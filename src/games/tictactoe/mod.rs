//! Tic-tac-toe game logic.

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod state;
mod types;

pub use action::{GameEvent, PlaceError};
pub use position::Position;
pub use score::Score;
pub use state::GameState;
pub use types::{Board, Cell, GameStatus, Player};
