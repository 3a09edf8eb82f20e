//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, and the longest possible turn log.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Symbol {
    /// Symbol X (always moves first).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A validated board coordinate.
///
/// Rows and columns are zero-based and always within `0..3`; the only way to
/// build one from untrusted input is [`Cell::new`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; CELL_COUNT] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, rejecting coordinates outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCell`] if either coordinate is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::InvalidCell { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Builds a cell from coordinates already known to be on the board.
    pub(crate) const fn from_parts(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.row, self.col)
    }
}

/// Wire shape of a [`Cell`]; validated on the way in.
#[derive(Serialize, Deserialize, JsonSchema)]
struct RawCell {
    row: usize,
    col: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = MoveError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col)
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row(),
            col: cell.col(),
        }
    }
}

/// 3x3 snapshot of cell occupancy.
///
/// Boards are derived from a turn log by [`crate::project_board`]; nothing in
/// the engine mutates one after it has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    rows: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// Intended for tests and tooling; the result need not be reachable
    /// through legal play.
    pub fn from_rows(rows: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Symbol occupying the cell, if any.
    pub fn get(&self, cell: Cell) -> Option<Symbol> {
        self.rows[cell.row()][cell.col()]
    }

    /// Marks a cell. Only the projector writes boards.
    pub(crate) fn set(&mut self, cell: Cell, symbol: Symbol) {
        self.rows[cell.row()][cell.col()] = Some(symbol);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of cells held by `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| **c == Some(symbol))
            .count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show as `.`.
    pub fn display(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.map_or_else(|| ".".to_string(), |s| s.to_string()))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}
