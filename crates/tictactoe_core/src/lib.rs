//! Tic-tac-toe engine built on an append-only turn log.
//!
//! The turn log is the only stored state. The board, the player to move,
//! and the outcome are pure functions of it, recomputed on every read.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Outcome, Symbol};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.submit_move(row, col)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Symbol::X));
//!
//! game.restart();
//! assert_eq!(game.active_player(), Symbol::X);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod outcome;
mod players;
mod shared;
mod snapshot;
mod turn_log;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MoveContract};
pub use game::Game;
pub use outcome::Outcome;
pub use players::PlayerRegistry;
pub use rules::{active_player, evaluate, project_board};
pub use shared::SharedGame;
pub use snapshot::GameSnapshot;
pub use turn_log::TurnLog;
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Symbol};
