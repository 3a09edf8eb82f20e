//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They are the only thing the
//! turn log stores; every other piece of game state is derived from them.

use crate::outcome::Outcome;
use crate::types::{Cell, Symbol};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player placing their symbol on a cell. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// Where the symbol was placed.
    pub cell: Cell,
    /// Who placed it.
    pub player: Symbol,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Symbol, cell: Cell) -> Self {
        Self { cell, player }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Symbol {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} selected {}", self.player, self.cell)
    }
}

/// Reason a move submission was rejected.
///
/// Every rejection leaves the turn log untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinate outside the 3x3 board.
    #[display("Cell ({row}, {col}) is outside the board")]
    InvalidCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a symbol.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Cell),

    /// The game has already been decided.
    #[display("Game is already over: {_0}")]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_reads_like_log_entry() {
        let mv = Move::new(Symbol::O, Cell::ALL[5]);
        assert_eq!(mv.to_string(), "O selected 1 : 2");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::InvalidCell { row: 3, col: 0 }.to_string(),
            "Cell (3, 0) is outside the board"
        );
        assert!(MoveError::CellOccupied(Cell::ALL[0])
            .to_string()
            .contains("occupied"));
        assert_eq!(
            MoveError::GameOver(Outcome::Win(Symbol::X)).to_string(),
            "Game is already over: X wins"
        );
    }
}
