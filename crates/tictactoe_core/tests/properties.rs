//! Property-based tests for the engine.
//!
//! Games are generated as arbitrary sequences of coordinate submissions,
//! including out-of-range and repeated cells, so the rejection paths are
//! exercised as much as the accepting ones.

use proptest::prelude::*;
use tictactoe_core::invariants::{InvariantSet, TurnLogInvariants};
use tictactoe_core::rules::{active_player_by_count, check_winner};
use tictactoe_core::{Board, Cell, Game, Outcome, Symbol, evaluate, project_board};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Coordinates slightly wider than the board, so some are invalid.
fn arb_coordinate() -> impl Strategy<Value = (usize, usize)> {
    (0usize..4, 0usize..4)
}

/// A sequence of submissions long enough to finish most games.
fn arb_submissions() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec(arb_coordinate(), 0..24)
}

/// Every cell in random order; playing it out always ends the game.
fn arb_full_order() -> impl Strategy<Value = Vec<Cell>> {
    Just(Cell::ALL.to_vec()).prop_shuffle()
}

/// Any 3x3 grid, legal or not.
fn arb_board() -> impl Strategy<Value = Board> {
    let cell = prop_oneof![Just(None), Just(Some(Symbol::X)), Just(Some(Symbol::O))];
    prop::array::uniform3(prop::array::uniform3(cell)).prop_map(Board::from_rows)
}

fn play(submissions: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in submissions {
        let _ = game.submit_move(row, col);
    }
    game
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_submission(submissions in arb_submissions()) {
        let mut game = Game::new();
        for (row, col) in submissions {
            let before = game.history().len();
            match game.submit_move(row, col) {
                Ok(_) => prop_assert_eq!(game.history().len(), before + 1),
                Err(_) => prop_assert_eq!(game.history().len(), before),
            }
            prop_assert!(TurnLogInvariants::check_all(game.turn_log()).is_ok());
            prop_assert_eq!(game.board().occupied(), game.history().len());
        }
    }

    #[test]
    fn prop_players_alternate_from_x(submissions in arb_submissions()) {
        let game = play(&submissions);
        for (i, mv) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            prop_assert_eq!(mv.player, expected);
        }
        prop_assert_eq!(game.active_player(), active_player_by_count(game.turn_log()));
    }

    #[test]
    fn prop_board_matches_history(submissions in arb_submissions()) {
        let game = play(&submissions);
        let board = game.board();
        for mv in game.history() {
            prop_assert_eq!(board.get(mv.cell), Some(mv.player));
        }
        prop_assert_eq!(board, project_board(game.turn_log()));
    }

    #[test]
    fn prop_outcome_is_idempotent(submissions in arb_submissions()) {
        let game = play(&submissions);
        prop_assert_eq!(game.outcome(), game.outcome());
        prop_assert_eq!(game.snapshot(), game.snapshot());
    }

    #[test]
    fn prop_terminal_games_reject_everything(
        order in arb_full_order(),
        row in 0usize..3,
        col in 0usize..3,
    ) {
        let mut game = Game::new();
        for cell in order {
            if game.outcome().is_terminal() {
                break;
            }
            prop_assert!(game.submit(cell).is_ok());
        }
        prop_assert!(game.outcome().is_terminal());

        let before = game.clone();
        prop_assert!(game.submit_move(row, col).is_err());
        prop_assert_eq!(game, before);
    }

    #[test]
    fn prop_restart_always_resets(submissions in arb_submissions()) {
        let mut game = play(&submissions);
        game.restart();
        prop_assert_eq!(game.board(), Board::new());
        prop_assert_eq!(game.active_player(), Symbol::X);
        prop_assert_eq!(game.outcome(), Outcome::Ongoing);
        prop_assert!(game.history().is_empty());
    }

    #[test]
    fn prop_evaluate_never_panics_on_malformed_boards(
        board in arb_board(),
        moves_played in 0usize..12,
    ) {
        let outcome = evaluate(&board, moves_played);
        match check_winner(&board) {
            Some(symbol) => prop_assert_eq!(outcome, Outcome::Win(symbol)),
            None if moves_played >= 9 => prop_assert_eq!(outcome, Outcome::Draw),
            None => prop_assert_eq!(outcome, Outcome::Ongoing),
        }
    }
}
