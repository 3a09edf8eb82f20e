//! Board projection: turn log to grid snapshot.

use crate::turn_log::TurnLog;
use crate::types::Board;
use tracing::{debug, instrument};

/// Derives the board from a turn log.
///
/// Every move is replayed in chronological order with no early exit, so a
/// log that somehow repeats a cell still projects deterministically: the
/// later move wins.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn project_board(log: &TurnLog) -> Board {
    let mut board = Board::new();
    for mv in log {
        board.set(mv.cell, mv.player);
    }
    debug!(occupied = board.occupied(), "Projected board");
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::{Cell, Symbol};

    #[test]
    fn test_empty_log_projects_empty_board() {
        assert_eq!(project_board(&TurnLog::new()), Board::new());
    }

    #[test]
    fn test_moves_land_on_their_cells() {
        let log = TurnLog::from(vec![
            Move::new(Symbol::X, Cell::ALL[0]),
            Move::new(Symbol::O, Cell::ALL[4]),
        ]);
        let board = project_board(&log);
        assert_eq!(board.get(Cell::ALL[0]), Some(Symbol::X));
        assert_eq!(board.get(Cell::ALL[4]), Some(Symbol::O));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_repeated_cell_takes_latest_move() {
        let log = TurnLog::from(vec![
            Move::new(Symbol::X, Cell::ALL[4]),
            Move::new(Symbol::O, Cell::ALL[4]),
        ]);
        assert_eq!(project_board(&log).get(Cell::ALL[4]), Some(Symbol::O));
    }
}
