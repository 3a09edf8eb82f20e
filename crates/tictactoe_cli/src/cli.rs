//! Command-line interface for the tic-tac-toe terminal.

use crate::command::parse_coordinate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (player names). Missing file means defaults.
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Print game state as JSON instead of a text board
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply a scripted sequence of moves and print the result
    Replay {
        /// Moves as `row,col`, in play order (X first)
        #[arg(value_parser = parse_coordinate, required = true)]
        moves: Vec<(usize, usize)>,
    },
}
