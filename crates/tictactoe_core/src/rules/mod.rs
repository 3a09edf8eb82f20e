//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive the board, the active player, and the outcome
//! from a turn log. None of them mutate anything, so callers may invoke them
//! as often as they need fresh state.

pub mod draw;
pub mod evaluate;
pub mod projector;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use projector::project_board;
pub use turn::{active_player, active_player_by_count};
pub use win::{WINNING_TRIPLES, check_winner};
