//! Terminal front end for the tic-tac-toe engine.
//!
//! Reads coordinates and commands, forwards them to [`tictactoe_core::Game`],
//! and prints the derived board, the player to move, and the outcome.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod terminal;

pub use cli::{Cli, Command as CliCommand};
pub use command::{Command, CommandError, HELP, parse, parse_coordinate};
pub use config::{AppConfig, ConfigError};
pub use terminal::Terminal;
