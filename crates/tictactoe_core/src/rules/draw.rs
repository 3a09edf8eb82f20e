//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board() {
        let row = [Some(Symbol::X); 3];
        assert!(is_full(&Board::from_rows([row, row, row])));
    }
}
