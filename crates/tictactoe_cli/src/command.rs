//! Parsing of interactive commands.

use tictactoe_core::Symbol;
use tracing::instrument;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's symbol.
    Move {
        /// Row (0-2 for a legal move).
        row: usize,
        /// Column (0-2 for a legal move).
        col: usize,
    },
    /// Start over with an empty board.
    Restart,
    /// Change a player's display name.
    Rename {
        /// Whose name changes.
        symbol: Symbol,
        /// The new name.
        name: String,
    },
    /// Show the move log, newest first.
    Log,
    /// Show the board and status.
    Board,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <row> <col>       place your symbol (also `row,col`), rows and columns 0-2
  restart           clear the board and start over
  name <X|O> <name> rename a player
  log               show moves played, newest first
  board             show the board
  help              show this list
  quit              leave";

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// First word is not a known command or a number.
    #[display("Unknown command `{word}`, try `help`")]
    Unknown {
        /// The unrecognised word.
        word: String,
    },
    /// Coordinates that are not two non-negative integers.
    #[display("Expected `row col` or `row,col`, got `{input}`")]
    BadCoordinate {
        /// The offending input.
        input: String,
    },
    /// Symbol other than X or O.
    #[display("Expected X or O, got `{input}`")]
    BadSymbol {
        /// The offending input.
        input: String,
    },
    /// `name` without a name.
    #[display("Usage: name <X|O> <name>")]
    MissingName,
}

impl std::error::Error for CommandError {}

/// Parses `row,col` or `row col` into a coordinate pair.
///
/// Range is not checked here; the engine rejects cells off the board.
///
/// # Errors
///
/// Returns [`CommandError::BadCoordinate`] unless the input is exactly two
/// non-negative integers.
pub fn parse_coordinate(input: &str) -> Result<(usize, usize), CommandError> {
    let bad = || CommandError::BadCoordinate {
        input: input.to_string(),
    };
    let parts: Vec<_> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Ok((row.parse().map_err(|_| bad())?, col.parse().map_err(|_| bad())?)),
        _ => Err(bad()),
    }
}

fn parse_symbol(input: &str) -> Result<Symbol, CommandError> {
    match input.to_ascii_uppercase().as_str() {
        "X" => Ok(Symbol::X),
        "O" => Ok(Symbol::O),
        _ => Err(CommandError::BadSymbol {
            input: input.to_string(),
        }),
    }
}

/// Parses one line of interactive input.
///
/// # Errors
///
/// Returns [`CommandError`] for blank, unknown, or malformed input.
#[instrument]
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "restart" | "r" => Ok(Command::Restart),
        "log" | "l" => Ok(Command::Log),
        "board" | "b" => Ok(Command::Board),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "name" => {
            let (symbol, name) = rest.split_once(char::is_whitespace).ok_or(CommandError::MissingName)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CommandError::MissingName);
            }
            Ok(Command::Rename {
                symbol: parse_symbol(symbol)?,
                name: name.to_string(),
            })
        }
        w if w.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
            let (row, col) = parse_coordinate(line)?;
            Ok(Command::Move { row, col })
        }
        _ => Err(CommandError::Unknown {
            word: word.to_string(),
        }),
    }
}
