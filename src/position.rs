//! Board positions for tic-tac-toe moves.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the 3x3 board.
///
/// The nine cells are a closed set, so out-of-range coordinates are
/// unrepresentable: transports construct positions through
/// [`Position::from_row_col`] and get `None` for anything outside the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corner positions.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge positions (neither corner nor center).
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// The row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// The column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from row/column coordinates.
    ///
    /// Returns `None` when either coordinate falls outside the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the positions whose squares are still empty.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
