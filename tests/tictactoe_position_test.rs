//! Tests for board positions and their use as input.

use strum::IntoEnumIterator;
use tictactoe_session::{Cell, GameEvent, GameState, Position};

#[test]
fn test_iter_yields_nine_positions_in_index_order() {
    assert_eq!(Position::iter().count(), 9);
    for (index, pos) in Position::iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(pos));
    }
}

#[test]
fn test_row_major_layout() {
    assert_eq!((Position::MiddleLeft.row(), Position::MiddleLeft.col()), (1, 0));
    assert_eq!((Position::TopRight.row(), Position::TopRight.col()), (0, 2));
    assert_eq!((Position::BottomCenter.row(), Position::BottomCenter.col()), (2, 1));
}

#[test]
fn test_position_display_uses_label() {
    assert_eq!(Position::Center.to_string(), "Center");
    assert_eq!(Position::TopLeft.to_string(), "Top-left");
}

#[test]
fn test_position_event_targets_matching_cell() {
    let mut game = GameState::new();
    game.start();
    game.dispatch(GameEvent::from(Position::BottomRight));
    assert_eq!(game.cell_at(8), Some(Cell::X));
    assert_eq!(game.board().get(Position::BottomRight), Cell::X);
}
