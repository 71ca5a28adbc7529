//! The game aggregate: seats, turn order, and move application.

use crate::action::{JoinError, Move, MoveError};
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Synthetic player id for the built-in heuristic opponent.
pub const BOT_ID: i64 = 0;

/// Display name for the built-in heuristic opponent.
pub const BOT_NAME: &str = "Bot 🤖";

/// A seated player: transport identity, display name, assigned mark.
///
/// The mark never changes after the seat is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: i64,
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a new player record.
    pub fn new(id: i64, name: String, mark: Mark) -> Self {
        Self { id, name, mark }
    }

    /// The player's opaque transport identity.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// A single tic-tac-toe game.
///
/// The lifecycle is `WaitingForOpponent` → `InProgress` → `Won`/`Draw`;
/// a terminal game never accepts another move. "Play again" means
/// constructing a fresh `Game`, not rewinding this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    player_x: Option<Player>,
    player_o: Option<Player>,
    to_move: Mark,
    vs_bot: bool,
    status: GameStatus,
}

// ─────────────────────────────────────────────────────────────
//  Construction and seating
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a game hosted by the given player, who takes the X seat.
    ///
    /// The game waits for an opponent; see [`Game::join`].
    #[instrument]
    pub fn new(host_id: i64, host_name: String) -> Self {
        info!(host_id, "creating game, waiting for opponent");
        Self {
            board: Board::new(),
            player_x: Some(Player::new(host_id, host_name, Mark::X)),
            player_o: None,
            to_move: Mark::X,
            vs_bot: false,
            status: GameStatus::WaitingForOpponent,
        }
    }

    /// Creates a game against the built-in heuristic opponent.
    ///
    /// The host takes X; the bot is seated immediately as O and the
    /// game starts without a join step.
    #[instrument]
    pub fn new_vs_bot(host_id: i64, host_name: String) -> Self {
        info!(host_id, "creating game against the bot");
        Self {
            board: Board::new(),
            player_x: Some(Player::new(host_id, host_name, Mark::X)),
            player_o: Some(Player::new(BOT_ID, BOT_NAME.to_string(), Mark::O)),
            to_move: Mark::X,
            vs_bot: true,
            status: GameStatus::InProgress,
        }
    }

    /// Seats the joining player as O and starts the game.
    ///
    /// The turn stays with X. A rejection is a full no-op.
    ///
    /// # Errors
    ///
    /// [`JoinError::SeatTaken`] when O is already seated,
    /// [`JoinError::SelfJoin`] when the candidate is the host.
    #[instrument(skip(self))]
    pub fn join(&mut self, id: i64, name: String) -> Result<Mark, JoinError> {
        if self.player_o.is_some() {
            warn!(id, "join rejected, seat already taken");
            return Err(JoinError::SeatTaken);
        }
        if self.player_x.as_ref().is_some_and(|p| p.id() == id) {
            warn!(id, "join rejected, host cannot join their own game");
            return Err(JoinError::SelfJoin);
        }

        info!(id, "player joined as O");
        self.player_o = Some(Player::new(id, name, Mark::O));
        self.status = GameStatus::InProgress;
        Ok(Mark::O)
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Applies a move.
    ///
    /// On acceptance the mark is written, then the status is settled:
    /// a completed line wins for the mover, a full board draws, and
    /// otherwise the turn flips. Every rejection is a full no-op, so
    /// retrying a rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotStarted`] before the second player joins,
    /// [`MoveError::GameOver`] after a win or draw,
    /// [`MoveError::SquareOccupied`] for a taken square,
    /// [`MoveError::WrongTurn`] for an out-of-turn mark.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, mov: Move) -> Result<(), MoveError> {
        match self.status {
            GameStatus::WaitingForOpponent => {
                warn!(%mov, "move rejected, game hasn't started");
                return Err(MoveError::NotStarted);
            }
            GameStatus::Won(_) | GameStatus::Draw => {
                warn!(%mov, "move rejected, game is over");
                return Err(MoveError::GameOver);
            }
            GameStatus::InProgress => {}
        }
        if !self.board.is_empty(mov.position) {
            warn!(%mov, "move rejected, square occupied");
            return Err(MoveError::SquareOccupied(mov.position));
        }
        if mov.player != self.to_move {
            warn!(%mov, to_move = ?self.to_move, "move rejected, out of turn");
            return Err(MoveError::WrongTurn(mov.player));
        }

        self.board.set(mov.position, Square::Occupied(mov.player));

        if let Some(winner) = rules::check_winner(&self.board) {
            info!(?winner, "game won");
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            info!("game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug_assert!(self.board_balanced(), "mark counts out of balance");
        Ok(())
    }

    /// Mark counts stay within one of each other under turn alternation.
    fn board_balanced(&self) -> bool {
        let count = |mark: Mark| {
            self.board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(mark))
                .count()
        };
        let xs = count(Mark::X);
        let os = count(Mark::O);
        xs == os || xs == os + 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game accepts no further moves.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning mark, or `None` while ongoing or drawn.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True when the O seat is held by the built-in opponent.
    pub fn vs_bot(&self) -> bool {
        self.vs_bot
    }

    /// The player seated as X.
    pub fn player_x(&self) -> Option<&Player> {
        self.player_x.as_ref()
    }

    /// The player seated as O.
    pub fn player_o(&self) -> Option<&Player> {
        self.player_o.as_ref()
    }

    /// The seated player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        match self.to_move {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// The seated player who won, or `None` while ongoing or drawn.
    pub fn winner_player(&self) -> Option<&Player> {
        match self.winner()? {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Looks up a seated player by transport identity.
    pub fn player(&self, id: i64) -> Option<&Player> {
        [self.player_x.as_ref(), self.player_o.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.id() == id)
    }
}
