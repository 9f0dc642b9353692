//! Mark balance invariant: X never trails O, and leads by at most one.

use super::Invariant;
use crate::games::tictactoe::{Cell, GameState};

/// Invariant: `#X - #O` is 0 or 1.
///
/// X always moves first and turns alternate, so the board can never
/// hold more O marks than X marks.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Cell::X);
        let o = state.board().count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
