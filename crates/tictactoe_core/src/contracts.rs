//! Contract-based validation for move submission.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! precondition is checked against the board derived from the log before
//! the move; the postcondition compares the log before and after.

use crate::action::MoveError;
use crate::invariants::{InvariantSet, InvariantViolation, TurnLogInvariants};
use crate::rules::{evaluate, project_board};
use crate::turn_log::TurnLog;
use crate::types::{Board, Cell};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game must still be ongoing.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] once the outcome is terminal.
    #[instrument(skip(board))]
    pub fn check(board: &Board, moves_played: usize) -> Result<(), MoveError> {
        let outcome = evaluate(board, moves_played);
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] if the cell holds a symbol.
    #[instrument(skip(board))]
    pub fn check(board: &Board, cell: Cell) -> Result<(), MoveError> {
        if board.is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

/// Contract for appending a move to the turn log.
///
/// Preconditions:
/// - Game is not over
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one move was appended and earlier moves are untouched
/// - Every turn log invariant holds
pub struct MoveContract;

impl Contract<TurnLog, Cell> for MoveContract {
    fn pre(log: &TurnLog, cell: &Cell) -> Result<(), MoveError> {
        let board = project_board(log);
        GameNotOver::check(&board, log.len())?;
        CellIsEmpty::check(&board, *cell)?;
        Ok(())
    }

    fn post(before: &TurnLog, after: &TurnLog) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.len() != before.len() + 1 || !after.moves().starts_with(before.moves()) {
            warn!(
                before = before.len(),
                after = after.len(),
                "Turn log was not extended by exactly one move"
            );
            violations.push(InvariantViolation::new(
                "Turn log grows by exactly one appended move",
            ));
        }

        if let Err(mut found) = TurnLogInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
