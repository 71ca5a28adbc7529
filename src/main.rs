//! Console driver: a stand-in chat loop for the tic-tac-toe engine.
//!
//! Plays the same role a chat transport would: it owns the game
//! registry, renders engine state, translates rejections into notices,
//! and asks the heuristic selector for the bot's answers.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use tictactoe_bot::{
    BOT_ID, ChatId, Game, GameRegistry, Move, Position, board_text, heuristic, status_text,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Chat id for the single console session.
const CONSOLE_CHAT: ChatId = 1;

/// Transport id for the player at the keyboard (X seat).
const HOST_ID: i64 = 1;

/// Transport id for the second hot-seat player.
const GUEST_ID: i64 = 2;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Bot { name } => run(Game::new_vs_bot(HOST_ID, name)),
        Command::Duel { x, o } => {
            let mut game = Game::new(HOST_ID, x);
            let mark = game
                .join(GUEST_ID, o)
                .context("second player could not join")?;
            info!(?mark, "second player joined");
            run(game)
        }
    }
}

/// Runs the console loop until the player quits.
fn run(game: Game) -> Result<()> {
    let mut registry = GameRegistry::new();
    registry.start(CONSOLE_CHAT, game);

    loop {
        let Some(game) = registry.game_mut(CONSOLE_CHAT) else {
            break;
        };

        println!("\n{}", status_text(game));
        println!("{}", board_text(game));

        if game.is_over() {
            if prompt("Play again? [y/N] ")?.trim().eq_ignore_ascii_case("y") {
                let next = fresh_game(game);
                registry.start(CONSOLE_CHAT, next);
                continue;
            }
            break;
        }

        // The bot answers its own turns.
        if game.vs_bot() && game.current_player().map(|p| p.id()) == Some(BOT_ID) {
            if let Some(pos) = heuristic::choose_move(game) {
                debug!(%pos, "bot move");
                let mov = Move::new(game.to_move(), pos);
                if let Err(err) = game.make_move(mov) {
                    // The selector only proposes legal squares.
                    println!("Bot move rejected: {err}");
                }
            }
            continue;
        }

        let line = prompt("row col (0-2 each, q to quit) > ")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        match parse_coords(input) {
            Some(pos) => {
                let mov = Move::new(game.to_move(), pos);
                if let Err(err) = game.make_move(mov) {
                    println!("{err}");
                }
            }
            None => println!("Enter a row and a column, each 0-2, e.g. `0 2`."),
        }
    }

    Ok(())
}

/// Builds a replacement game with the same seats as the finished one.
fn fresh_game(old: &Game) -> Game {
    let (host_id, host_name) = match old.player_x() {
        Some(player) => (player.id(), player.name().to_string()),
        None => (HOST_ID, "Player".to_string()),
    };

    if old.vs_bot() {
        return Game::new_vs_bot(host_id, host_name);
    }

    let mut game = Game::new(host_id, host_name);
    if let Some(guest) = old.player_o() {
        // Seats carry over; a failed rejoin just leaves the seat open.
        let _ = game.join(guest.id(), guest.name().to_string());
    }
    game
}

/// Parses a "row col" pair into a board position.
fn parse_coords(input: &str) -> Option<Position> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Position::from_row_col(row, col)
}

/// Prints a prompt and reads one line from stdin.
fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        // EOF behaves like quitting.
        return Ok("q".to_string());
    }
    Ok(line)
}
