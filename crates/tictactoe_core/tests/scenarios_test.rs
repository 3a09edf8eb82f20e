//! End-to-end game scenarios through the public engine surface.

use tictactoe_core::{Board, Cell, Game, MoveError, Outcome, Symbol};

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.submit_move(row, col)
            .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected: {e}"));
    }
}

#[test]
fn test_top_row_wins_for_x() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(game.outcome(), Outcome::Win(Symbol::X));
    let players: Vec<_> = game.history().iter().map(|m| m.player).collect();
    assert_eq!(
        players,
        vec![Symbol::X, Symbol::O, Symbol::X, Symbol::O, Symbol::X]
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Final board:
    // X O X
    // X O X
    // O X O
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0), // X
            (0, 1), // O
            (0, 2), // X
            (1, 1), // O
            (1, 0), // X
            (2, 0), // O
            (1, 2), // X
            (2, 2), // O
            (2, 1), // X
        ],
    );

    let x = Some(Symbol::X);
    let o = Some(Symbol::O);
    assert_eq!(
        game.board(),
        Board::from_rows([[x, o, x], [x, o, x], [o, x, o]])
    );
    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_same_cell_twice_is_occupied() {
    let mut game = Game::new();
    game.submit_move(0, 0).unwrap();

    let err = game.submit_move(0, 0).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Cell::new(0, 0).unwrap()));
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.active_player(), Symbol::O);
}

#[test]
fn test_out_of_range_is_invalid_cell() {
    let mut game = Game::new();
    assert_eq!(
        game.submit_move(3, 0),
        Err(MoveError::InvalidCell { row: 3, col: 0 })
    );
    assert!(game.history().is_empty());
}

#[test]
fn test_moves_after_win_are_game_over() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let board = game.board();

    assert_eq!(
        game.submit_move(2, 2),
        Err(MoveError::GameOver(Outcome::Win(Symbol::X)))
    );
    assert_eq!(game.board(), board);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    game.restart();

    assert_eq!(game.board(), Board::new());
    assert_eq!(game.active_player(), Symbol::X);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert!(game.history().is_empty());

    // A fresh game is fully playable again.
    game.submit_move(0, 0).unwrap();
    assert_eq!(game.history()[0].player, Symbol::X);
}

#[test]
fn test_win_on_ninth_move_is_not_draw() {
    // X O X
    // O X O
    // O X X  <- X completes the main diagonal with the last cell
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(game.outcome(), Outcome::Win(Symbol::X));
}
