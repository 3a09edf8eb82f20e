//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Symbol};
use tracing::instrument;

const fn cell(row: u8, col: u8) -> Cell {
    Cell::from_parts(row, col)
}

/// The eight winning triples, in the order they are checked.
pub const WINNING_TRIPLES: [[Cell; 3]; 8] = [
    // Rows
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    // Columns
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    // Diagonals
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first fully-held triple in
/// [`WINNING_TRIPLES`] order. Malformed boards where both symbols hold a
/// triple therefore still get a defined answer.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    WINNING_TRIPLES.iter().find_map(|[a, b, c]| {
        let symbol = board.get(*a)?;
        (board.get(*b) == Some(symbol) && board.get(*c) == Some(symbol)).then_some(symbol)
    })
}
