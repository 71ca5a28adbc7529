//! Command-line interface for the console driver.

use clap::{Parser, Subcommand};

/// Tic-tac-toe for chat sessions, playable from the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Tic-tac-toe engine with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the built-in bot
    Bot {
        /// Display name for the human player
        #[arg(long, default_value = "Player")]
        name: String,
    },

    /// Hot-seat game for two players at one console
    Duel {
        /// Display name for the player on X
        #[arg(long, default_value = "Player 1")]
        x: String,

        /// Display name for the player on O
        #[arg(long, default_value = "Player 2")]
        o: String,
    },
}
