//! Tic-tac-toe terminal entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{AppConfig, Cli, CliCommand, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only game output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let players = AppConfig::load(&cli.config)?.into_players();
    let mut terminal = Terminal::new(players, cli.json);
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => {
            info!("Starting interactive game");
            terminal.run(io::stdin().lock(), &mut stdout)
        }
        CliCommand::Replay { moves } => {
            info!(moves = moves.len(), "Replaying moves");
            terminal.replay(&moves, &mut stdout)
        }
    }
}
