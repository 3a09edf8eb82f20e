//! Turn resolution: whose symbol moves next.
//!
//! The engine uses [`active_player`], which looks only at the most recent
//! move. [`active_player_by_count`] is the order-independent formulation; the
//! two agree on every log that keeps one move per cell and strictly
//! alternates, and the alternating-turn invariant checks exactly that.

use crate::turn_log::TurnLog;
use crate::types::Symbol;
use tracing::instrument;

/// X on an empty log or after O; O after X.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn active_player(log: &TurnLog) -> Symbol {
    match log.last() {
        Some(mv) if mv.player == Symbol::X => Symbol::O,
        _ => Symbol::X,
    }
}

/// X when both symbols have played equally often, O otherwise.
pub fn active_player_by_count(log: &TurnLog) -> Symbol {
    let xs = log.moves().iter().filter(|m| m.player == Symbol::X).count();
    let os = log.len() - xs;
    if xs == os { Symbol::X } else { Symbol::O }
}
