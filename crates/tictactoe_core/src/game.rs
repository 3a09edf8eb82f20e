//! Tic-tac-toe game engine.
//!
//! The engine owns a single [`TurnLog`]. Submitting a move validates it
//! against state derived from the log, then appends. Board, active player,
//! and outcome are recomputed from the log on every read.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::rules::{active_player, evaluate, project_board};
use crate::snapshot::GameSnapshot;
use crate::turn_log::TurnLog;
use crate::types::{Board, Cell, Symbol};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    log: TurnLog,
}

impl Game {
    /// Creates a new game with an empty turn log.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a game by submitting each cell in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; later cells are not attempted.
    #[instrument]
    pub fn replay(cells: &[Cell]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for cell in cells {
            game.submit(*cell)?;
        }
        Ok(game)
    }

    /// Submits a move for the active player at `(row, col)`.
    ///
    /// Checks run in order: coordinates on the board, game not over, cell
    /// empty. A rejected move leaves the turn log unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCell`] if `row` or `col` is outside `0..3`
    /// - [`MoveError::GameOver`] if the outcome is already terminal
    /// - [`MoveError::CellOccupied`] if the cell already holds a symbol
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let cell = Cell::new(row, col).inspect_err(|e| {
            warn!(row, col, error = %e, "Rejected move");
        })?;
        self.submit(cell)
    }

    /// Submits a move for the active player at an already-validated cell.
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_move`], minus the range check.
    #[instrument(skip(self, cell), fields(cell = %cell))]
    pub fn submit(&mut self, cell: Cell) -> Result<Move, MoveError> {
        MoveContract::pre(&self.log, &cell).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        #[cfg(debug_assertions)]
        let before = self.log.clone();

        let mv = Move::new(active_player(&self.log), cell);
        self.log.append(mv);

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, &self.log);
            if let Err(violations) = &checked {
                tracing::error!(?violations, "Turn log invariant violated");
            }
            debug_assert!(checked.is_ok(), "Turn log invariants violated: {checked:?}");
        }

        info!(
            player = %mv.player,
            moves = self.log.len(),
            outcome = %self.outcome(),
            "Move accepted"
        );
        Ok(mv)
    }

    /// Clears the turn log. Always succeeds.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn restart(&mut self) {
        self.log = TurnLog::new();
        info!("Game restarted");
    }

    /// Board derived from the turn log.
    pub fn board(&self) -> Board {
        project_board(&self.log)
    }

    /// Symbol expected to move next.
    pub fn active_player(&self) -> Symbol {
        active_player(&self.log)
    }

    /// Current outcome derived from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board(), self.log.len())
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        self.log.moves()
    }

    /// The underlying turn log.
    pub fn turn_log(&self) -> &TurnLog {
        &self.log
    }

    /// Cells that would currently accept a move.
    ///
    /// Empty once the game is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Cell> {
        let board = self.board();
        if evaluate(&board, self.log.len()).is_terminal() {
            debug!("Game over, no valid moves");
            return Vec::new();
        }
        board.empty_cells()
    }

    /// All derived state in one read.
    pub fn snapshot(&self) -> GameSnapshot {
        let board = self.board();
        GameSnapshot::new(
            board,
            self.active_player(),
            evaluate(&board, self.log.len()),
            self.log.moves().to_vec(),
        )
    }
}
