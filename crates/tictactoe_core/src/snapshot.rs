//! Serializable view of all derived game state.

use crate::action::Move;
use crate::outcome::Outcome;
use crate::types::{Board, Symbol};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything a UI needs to render one frame, read in one call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Board derived from the turn log.
    board: Board,
    /// Symbol expected to move next.
    active_player: Symbol,
    /// Current outcome.
    outcome: Outcome,
    /// Accepted moves, oldest first.
    history: Vec<Move>,
}

impl GameSnapshot {
    pub(crate) fn new(
        board: Board,
        active_player: Symbol,
        outcome: Outcome,
        history: Vec<Move>,
    ) -> Self {
        Self {
            board,
            active_player,
            outcome,
            history,
        }
    }
}
