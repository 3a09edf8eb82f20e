//! Thread-safe handle for a game driven by several callers.

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::snapshot::GameSnapshot;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument};

/// Shared game whose moves are validated and appended under one lock.
///
/// Two near-simultaneous submissions for the same cell serialize: the second
/// sees the first's move and is rejected with `CellOccupied`.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates a handle around a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a move for the active player.
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_move`].
    #[instrument(skip(self))]
    pub fn submit_move(&self, row: usize, col: usize) -> Result<Move, MoveError> {
        self.lock().submit_move(row, col)
    }

    /// Clears the turn log.
    #[instrument(skip(self))]
    pub fn restart(&self) {
        self.lock().restart();
    }

    /// All derived state, read under the lock.
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` against the game while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        // Every mutation completes before the guard drops, so a poisoned
        // lock still guards a consistent log.
        self.game.lock().unwrap_or_else(|poisoned| {
            debug!("Recovering poisoned game lock");
            poisoned.into_inner()
        })
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }
}
