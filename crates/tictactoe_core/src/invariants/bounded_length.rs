//! Bounded length: the log stops growing once the game is decided.

use super::Invariant;
use crate::rules::{evaluate, project_board};
use crate::turn_log::TurnLog;
use crate::types::CELL_COUNT;

/// Invariant: at most nine moves, none of them after a terminal outcome.
pub struct BoundedLengthInvariant;

impl Invariant<TurnLog> for BoundedLengthInvariant {
    fn holds(log: &TurnLog) -> bool {
        let moves = log.moves();
        if moves.len() > CELL_COUNT {
            return false;
        }

        // Every strict prefix must still have been ongoing.
        (0..moves.len()).all(|n| {
            let prefix = TurnLog::from(moves[..n].to_vec());
            !evaluate(&project_board(&prefix), n).is_terminal()
        })
    }

    fn description() -> &'static str {
        "At most nine moves, none after the game is decided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Symbol};

    #[test]
    fn test_moves_after_win_violate() {
        let log = TurnLog::from(vec![
            Move::new(Symbol::X, Cell::ALL[0]),
            Move::new(Symbol::O, Cell::ALL[3]),
            Move::new(Symbol::X, Cell::ALL[1]),
            Move::new(Symbol::O, Cell::ALL[4]),
            Move::new(Symbol::X, Cell::ALL[2]),
            Move::new(Symbol::O, Cell::ALL[5]),
        ]);
        assert!(!BoundedLengthInvariant::holds(&log));
        assert!(BoundedLengthInvariant::holds(&TurnLog::from(
            log.moves()[..5].to_vec()
        )));
    }

    #[test]
    fn test_ten_moves_violate() {
        let mut moves: Vec<_> = Cell::ALL
            .iter()
            .map(|cell| Move::new(Symbol::X, *cell))
            .collect();
        moves.push(Move::new(Symbol::O, Cell::ALL[0]));
        assert!(!BoundedLengthInvariant::holds(&TurnLog::from(moves)));
    }
}
