//! Move actions and typed rejection reasons.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark making the move.
    pub player: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Mark, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected. Every rejection leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is still waiting for a second player.
    #[display("The game hasn't started yet")]
    NotStarted,

    /// The game is already over.
    #[display("The game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// It's not this mark's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for MoveError {}

/// Why a join was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JoinError {
    /// The O seat is already taken.
    #[display("The game already has two players")]
    SeatTaken,

    /// The joining identity is the one already seated as X.
    #[display("You are already playing in this game")]
    SelfJoin,
}

impl std::error::Error for JoinError {}
