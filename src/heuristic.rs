//! Heuristic move selection for the built-in opponent.
//!
//! A single-ply priority chain: win now, block, center, corner, edge.
//! Deliberately not minimax; a decent opponent, not an unbeatable one.

use crate::game::Game;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus};
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chooses a move for the side to move.
///
/// Returns `None` when the game is not in progress or no empty square
/// remains; both are defensive guards, callers normally check first.
/// The selection is read-only: the caller applies the returned position
/// through [`Game::make_move`] itself.
///
/// Corner and edge picks are uniform over the empty candidates, drawn
/// from the process-wide RNG. No seeding contract is exposed.
#[instrument(skip(game))]
pub fn choose_move(game: &Game) -> Option<Position> {
    if game.status() != GameStatus::InProgress {
        return None;
    }

    let mark = game.to_move();
    let board = game.board();

    // 1. Complete a line of our own.
    if let Some(pos) = rules::completing_move(board, mark) {
        debug!(?mark, %pos, "winning move");
        return Some(pos);
    }

    // 2. Deny the opponent theirs.
    if let Some(pos) = rules::completing_move(board, mark.opponent()) {
        debug!(?mark, %pos, "blocking move");
        return Some(pos);
    }

    // 3. Take the center.
    if board.is_empty(Position::Center) {
        debug!(?mark, "taking center");
        return Some(Position::Center);
    }

    // 4. Take a corner.
    if let Some(pos) = random_empty(board, &Position::CORNERS) {
        debug!(?mark, %pos, "taking corner");
        return Some(pos);
    }

    // 5. Take an edge.
    if let Some(pos) = random_empty(board, &Position::EDGES) {
        debug!(?mark, %pos, "taking edge");
        return Some(pos);
    }

    None
}

/// Uniform random pick among the still-empty candidates.
fn random_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    let open: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    open.choose(&mut rand::thread_rng()).copied()
}
