//! Interactive and scripted play against the engine.
//!
//! The terminal only forwards coordinates and commands to the engine and
//! prints whatever the engine derives afterwards.

use crate::command::{self, Command, HELP};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{Game, PlayerRegistry};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A game plus the names shown for its players.
#[derive(Debug)]
pub struct Terminal {
    game: Game,
    players: PlayerRegistry,
    json: bool,
}

impl Terminal {
    /// Creates a terminal with a fresh game.
    pub fn new(players: PlayerRegistry, json: bool) -> Self {
        Self {
            game: Game::new(),
            players,
            json,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The player names in use.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Bad input and rejected moves are reported and the loop carries on.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{HELP}\n")?;
        self.print_status(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let flow = match command::parse(&line) {
                Ok(cmd) => self.execute(cmd, out)?,
                Err(command::CommandError::Empty) => Flow::Continue,
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(moves = self.game.history().len(), "Leaving game");
        Ok(())
    }

    /// Submits moves in order and prints the resulting state.
    ///
    /// # Errors
    ///
    /// Fails on the first rejected move, naming its position in the script.
    #[instrument(skip(self, out))]
    pub fn replay(&mut self, moves: &[(usize, usize)], out: &mut impl Write) -> Result<()> {
        for (i, &(row, col)) in moves.iter().enumerate() {
            self.game
                .submit_move(row, col)
                .with_context(|| format!("Move {} ({row}, {col}) rejected", i + 1))?;
        }
        self.print_status(out)
    }

    fn execute(&mut self, cmd: Command, out: &mut impl Write) -> Result<Flow> {
        match cmd {
            Command::Move { row, col } => match self.game.submit_move(row, col) {
                Ok(_) => self.print_status(out)?,
                Err(e) => {
                    warn!(row, col, error = %e, "Move rejected");
                    writeln!(out, "{e}")?;
                }
            },
            Command::Restart => {
                self.game.restart();
                writeln!(out, "New game.")?;
                self.print_status(out)?;
            }
            Command::Rename { symbol, name } => {
                if self.players.rename(symbol, name) {
                    writeln!(out, "{symbol} is now {}.", self.players.name(symbol))?;
                }
            }
            Command::Log => self.print_log(out)?,
            Command::Board => self.print_status(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_log(&self, out: &mut impl Write) -> Result<()> {
        if self.game.history().is_empty() {
            writeln!(out, "No moves yet.")?;
        }
        for mv in self.game.turn_log().newest_first() {
            writeln!(out, "{} ({})", mv, self.players.name(mv.player))?;
        }
        Ok(())
    }

    fn print_status(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut *out, &self.game.snapshot())
                .context("Failed to encode game state")?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "{}\n", self.game.board().display())?;
        let outcome = self.game.outcome();
        match self.players.describe(&outcome) {
            Some(headline) => writeln!(out, "{headline} Type `restart` to play again.")?,
            None => {
                let symbol = self.game.active_player();
                writeln!(out, "{} ({symbol}) to move.", self.players.name(symbol))?;
            }
        }
        Ok(())
    }
}
