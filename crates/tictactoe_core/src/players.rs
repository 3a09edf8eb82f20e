//! Display names for the two symbols.
//!
//! The registry belongs to the UI side of the engine: renaming a player never
//! touches the turn log or any rule.

use crate::outcome::Outcome;
use crate::types::Symbol;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Maps each symbol to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerRegistry {
    #[serde(default = "default_x")]
    x: String,
    #[serde(default = "default_o")]
    o: String,
}

fn default_x() -> String {
    "Player 1".to_string()
}

fn default_o() -> String {
    "Player 2".to_string()
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

impl PlayerRegistry {
    /// Creates a registry with explicit names.
    ///
    /// Blank names fall back to the defaults.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        let mut registry = Self::default();
        registry.rename(Symbol::X, x);
        registry.rename(Symbol::O, o);
        registry
    }

    /// Name shown for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Renames a player, returning whether the name changed.
    ///
    /// Surrounding whitespace is trimmed; a blank name is ignored.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!(%symbol, "Ignoring blank player name");
            return false;
        }

        let slot = match symbol {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };
        debug!(%symbol, from = %slot, to = trimmed, "Renaming player");
        *slot = trimmed.to_string();
        true
    }

    /// Symbols paired with their names, X first.
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, &str)> {
        Symbol::iter().map(|symbol| (symbol, self.name(symbol)))
    }

    /// Headline for a finished game, or `None` while it is ongoing.
    pub fn describe(&self, outcome: &Outcome) -> Option<String> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Win(symbol) => Some(format!("{} won!", self.name(*symbol))),
            Outcome::Draw => Some("Draw!".to_string()),
        }
    }
}
