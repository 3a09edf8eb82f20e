//! One move per cell: no cell is ever played twice.

use super::Invariant;
use crate::turn_log::TurnLog;
use crate::types::CELL_COUNT;

/// Invariant: every cell appears at most once in the log.
pub struct OneMovePerCellInvariant;

impl Invariant<TurnLog> for OneMovePerCellInvariant {
    fn holds(log: &TurnLog) -> bool {
        let mut seen = [false; CELL_COUNT];
        log.moves()
            .iter()
            .all(|mv| !std::mem::replace(&mut seen[mv.cell.index()], true))
    }

    fn description() -> &'static str {
        "Each cell is played at most once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Symbol};

    #[test]
    fn test_distinct_cells_hold() {
        let log = TurnLog::from(vec![
            Move::new(Symbol::X, Cell::ALL[0]),
            Move::new(Symbol::O, Cell::ALL[1]),
        ]);
        assert!(OneMovePerCellInvariant::holds(&log));
    }

    #[test]
    fn test_repeated_cell_violates() {
        let log = TurnLog::from(vec![
            Move::new(Symbol::X, Cell::ALL[3]),
            Move::new(Symbol::O, Cell::ALL[3]),
        ]);
        assert!(!OneMovePerCellInvariant::holds(&log));
    }
}
