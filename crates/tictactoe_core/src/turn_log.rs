//! Append-only record of moves, the single source of truth for a game.

use crate::action::Move;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordered record of every accepted move, oldest first.
///
/// The log only grows through [`crate::Game::submit_move`], which validates
/// each move against the state derived from the log before it. Restarting a
/// game swaps in a fresh empty log instead of editing this one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TurnLog {
    moves: Vec<Move>,
}

impl TurnLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves in chronological order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves newest first, the order a move-log display shows them.
    pub fn newest_first(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }

    /// The most recently appended move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Appends an already-validated move.
    pub(crate) fn append(&mut self, mv: Move) {
        self.moves.push(mv);
    }
}

impl From<Vec<Move>> for TurnLog {
    /// Wraps raw moves without validation, for checking invariants against
    /// logs that did not come from play.
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a TurnLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
