//! Game status derived from a board.

use crate::types::Symbol;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of a game. Derived on every read, never stored.
///
/// `Ongoing` is the initial state; `Win` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    Ongoing,
    /// A symbol completed a winning triple.
    Win(Symbol),
    /// All nine cells are filled with no winning triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(*symbol),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
