//! Turn order invariant: the player to move follows from the mark counts.

use super::Invariant;
use crate::games::tictactoe::{Cell, GameState, Player};

/// Invariant: while a game is in progress, X is to move when the mark
/// counts are equal and O otherwise.
///
/// Once a game ends the turn still flips on the final placement, so the
/// same relation holds for terminal boards too.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Cell::X);
        let o = state.board().count(Cell::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
