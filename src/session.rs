//! Per-chat game registry for the transport layer.

use crate::game::Game;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Identifier of a chat session. Each chat owns at most one live game.
pub type ChatId = i64;

/// Explicitly owned mapping from chat session to its live game.
///
/// Starting a new game for a chat replaces the previous one wholesale,
/// which is also how "play again" works. The registry does no locking:
/// the core is synchronous and the embedding transport serializes
/// access per chat.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: HashMap<ChatId, Game>,
}

impl GameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Installs a game for the chat, returning the replaced one if any.
    #[instrument(skip(self, game))]
    pub fn start(&mut self, chat_id: ChatId, game: Game) -> Option<Game> {
        info!(chat_id, "installing game for chat");
        self.games.insert(chat_id, game)
    }

    /// The live game for the chat, if any.
    pub fn game(&self, chat_id: ChatId) -> Option<&Game> {
        self.games.get(&chat_id)
    }

    /// Mutable access to the live game for the chat.
    pub fn game_mut(&mut self, chat_id: ChatId) -> Option<&mut Game> {
        self.games.get_mut(&chat_id)
    }

    /// Discards the chat's game, returning it if one was live.
    #[instrument(skip(self))]
    pub fn remove(&mut self, chat_id: ChatId) -> Option<Game> {
        debug!(chat_id, "removing game for chat");
        self.games.remove(&chat_id)
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True if no games are live.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
