//! Outcome evaluation.

use super::win::check_winner;
use crate::outcome::Outcome;
use crate::types::{Board, CELL_COUNT};
use tracing::{debug, instrument};

/// Derives the outcome from a board and the number of moves played.
///
/// A win takes precedence over a full board, so a ninth move that completes
/// a triple is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, moves_played: usize) -> Outcome {
    let outcome = match check_winner(board) {
        Some(symbol) => Outcome::Win(symbol),
        None if moves_played >= CELL_COUNT => Outcome::Draw,
        None => Outcome::Ongoing,
    };
    debug!(?outcome, "Evaluated board");
    outcome
}
