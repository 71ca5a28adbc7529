//! Callback-data codec for chat inline buttons.
//!
//! A transport attaches one of these strings to each button it draws and
//! receives it back when the button is pressed. The codec is pure string
//! plumbing: malformed or stale data parses to `None` and is dropped,
//! never surfaced as an error.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A parsed button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callback {
    /// Play at the given position.
    Move(Position),
    /// Join the game as O.
    Join,
    /// Discard the finished game and start a new one.
    PlayAgain,
    /// Dead button: an occupied square or a finished board.
    Noop,
}

impl Callback {
    /// Renders the wire string carried by a button.
    pub fn data(&self) -> String {
        match self {
            Callback::Move(pos) => format!("move_{}_{}", pos.row(), pos.col()),
            Callback::Join => "join_o".to_string(),
            Callback::PlayAgain => "play_again".to_string(),
            Callback::Noop => "noop".to_string(),
        }
    }

    /// Parses a wire string back into a callback.
    ///
    /// Dead buttons carry per-square suffixes to keep their data unique
    /// (`noop_1_2`, `wait_0_0`); all of them parse as [`Callback::Noop`].
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "join_o" => return Some(Callback::Join),
            "play_again" => return Some(Callback::PlayAgain),
            _ => {}
        }
        if data == "noop" || data.starts_with("noop_") || data.starts_with("wait_") {
            return Some(Callback::Noop);
        }

        let coords = data.strip_prefix("move_")?;
        let (row, col) = coords.split_once('_')?;
        let row = row.parse::<usize>().ok()?;
        let col = col.parse::<usize>().ok()?;
        Position::from_row_col(row, col).map(Callback::Move)
    }
}

impl std::fmt::Display for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_coordinates() {
        assert_eq!(
            Callback::parse("move_1_2"),
            Some(Callback::Move(Position::MiddleRight))
        );
        assert_eq!(
            Callback::parse("move_0_0"),
            Some(Callback::Move(Position::TopLeft))
        );
    }

    #[test]
    fn renders_move_coordinates() {
        assert_eq!(Callback::Move(Position::Center).data(), "move_1_1");
        assert_eq!(Callback::Join.to_string(), "join_o");
    }

    #[test]
    fn parses_control_buttons() {
        assert_eq!(Callback::parse("join_o"), Some(Callback::Join));
        assert_eq!(Callback::parse("play_again"), Some(Callback::PlayAgain));
        assert_eq!(Callback::parse("noop_0_2"), Some(Callback::Noop));
        assert_eq!(Callback::parse("wait_1_1"), Some(Callback::Noop));
    }

    #[test]
    fn rejects_malformed_data() {
        assert_eq!(Callback::parse(""), None);
        assert_eq!(Callback::parse("move_3_0"), None);
        assert_eq!(Callback::parse("move_a_b"), None);
        assert_eq!(Callback::parse("something_else"), None);
    }
}
