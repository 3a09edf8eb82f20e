//! Alternating turns: X, O, X, O, ...

use super::Invariant;
use crate::rules::{active_player, active_player_by_count};
use crate::turn_log::TurnLog;
use crate::types::Symbol;

/// Invariant: players alternate turns, X first.
///
/// Also requires the last-move and count-based turn formulations to agree,
/// since the engine relies on the former.
pub struct AlternatingTurnsInvariant;

impl Invariant<TurnLog> for AlternatingTurnsInvariant {
    fn holds(log: &TurnLog) -> bool {
        let moves = log.moves();

        if moves.first().is_some_and(|mv| mv.player != Symbol::X) {
            return false;
        }

        if moves.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        active_player(log) == active_player_by_count(log)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
