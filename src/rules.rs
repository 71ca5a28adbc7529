//! Win and draw detection over the fixed winning lines.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::trace;

/// The eight winning lines: rows top-to-bottom, columns left-to-right,
/// then the two diagonals. Scans over this table rely on the order.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks for a mark holding a full line.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WIN_LINES {
        let occ = board.get(a);

        if occ != Square::Empty && occ == board.get(b) && occ == board.get(c) {
            if let Square::Occupied(mark) = occ {
                trace!(?mark, line = ?[a, b, c], "line complete");
                return Some(mark);
            }
        }
    }

    None
}

/// Finds the empty square that would complete a line already holding
/// two of `mark`.
///
/// Lines are scanned in [`WIN_LINES`] order and the first hit wins;
/// with several simultaneous threats only the earliest line is reported.
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    for line in WIN_LINES {
        let mut own = 0;
        let mut open = None;

        for pos in line {
            match board.get(pos) {
                Square::Occupied(m) if m == mark => own += 1,
                Square::Empty => open = Some(pos),
                Square::Occupied(_) => {}
            }
        }

        if own == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn detects_each_winning_line() {
        for line in WIN_LINES {
            let board = board_with(&line.map(|pos| (pos, Mark::O)));
            assert_eq!(check_winner(&board), Some(Mark::O), "line {line:?}");
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn completing_move_finds_the_open_square() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(completing_move(&board, Mark::X), Some(Position::TopCenter));
    }

    #[test]
    fn completing_move_ignores_blocked_lines() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(completing_move(&board, Mark::X), None);
    }

    #[test]
    fn completing_move_takes_the_first_line_in_scan_order() {
        // Two threats: top row (open at top-right) and left column
        // (open at bottom-left). The row comes first in the table.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::MiddleLeft, Mark::X),
        ]);
        assert_eq!(completing_move(&board, Mark::X), Some(Position::TopRight));
    }
}
