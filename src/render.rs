//! Chat-facing rendering: square symbols, board text, status lines.
//!
//! Transports render the grid as buttons or monospace text; either way
//! the symbols and wording come from here.

use crate::game::Game;
use crate::position::Position;
use crate::types::{GameStatus, Mark, Square};

/// Symbol shown for an empty square.
pub const EMPTY_SYMBOL: &str = "·";
/// Symbol shown for X.
pub const X_SYMBOL: &str = "❌";
/// Symbol shown for O.
pub const O_SYMBOL: &str = "⭕";

/// The display symbol for a square.
pub fn symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => EMPTY_SYMBOL,
        Square::Occupied(Mark::X) => X_SYMBOL,
        Square::Occupied(Mark::O) => O_SYMBOL,
    }
}

/// The display symbol for a mark.
pub fn mark_symbol(mark: Mark) -> &'static str {
    symbol(Square::Occupied(mark))
}

/// Renders the board as three lines of symbols.
pub fn board_text(game: &Game) -> String {
    let mut lines = Vec::with_capacity(3);
    for row in Position::ALL.chunks(3) {
        let cells: Vec<&str> = row.iter().map(|pos| symbol(game.board().get(*pos))).collect();
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}

/// The status line shown above the board.
pub fn status_text(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(_) => match game.winner_player() {
            Some(winner) => format!("🏆 {} {} wins!", mark_symbol(winner.mark()), winner.name()),
            None => "🏆 Game over".to_string(),
        },
        GameStatus::Draw => "🤝 It's a draw!".to_string(),
        GameStatus::WaitingForOpponent => "Waiting for opponent...".to_string(),
        GameStatus::InProgress => match game.current_player() {
            Some(player) => format!("{} {}'s turn", mark_symbol(player.mark()), player.name()),
            None => "Waiting for opponent...".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn empty_board_renders_dots() {
        let game = Game::new_vs_bot(1, "Ada".to_string());
        assert_eq!(board_text(&game), "· · ·\n· · ·\n· · ·");
    }

    #[test]
    fn marks_show_up_where_played() {
        let mut game = Game::new_vs_bot(1, "Ada".to_string());
        game.make_move(Move::new(Mark::X, Position::Center)).unwrap();
        assert_eq!(board_text(&game), "· · ·\n· ❌ ·\n· · ·");
    }

    #[test]
    fn status_reports_turn_and_waiting() {
        let game = Game::new(1, "Ada".to_string());
        assert_eq!(status_text(&game), "Waiting for opponent...");

        let game = Game::new_vs_bot(1, "Ada".to_string());
        assert_eq!(status_text(&game), "❌ Ada's turn");
    }

    #[test]
    fn status_reports_the_winner() {
        let mut game = Game::new_vs_bot(1, "Ada".to_string());
        for mov in [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
        ] {
            game.make_move(mov).unwrap();
        }
        assert_eq!(status_text(&game), "🏆 ❌ Ada wins!");
    }
}
