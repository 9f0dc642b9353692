//! Named board positions.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[display("Center")]
    Center,
    /// Middle-right (position 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column, `None` outside the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_row_major() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row(), index / 3);
            assert_eq!(pos.col(), index % 3);
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_index_out_of_bounds() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Position::Center.to_string(), "Center");
        assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
    }
}
