//! Tests for the tic-tac-toe game engine.

use tictactoe::{GameEngine, Mark, MoveError, Status, new_game};

fn play(moves: &[(i32, i32)]) -> GameEngine {
    GameEngine::replay(moves).expect("Valid moves")
}

#[test]
fn test_new_game_is_empty_and_unfinished() {
    let game = new_game();
    assert_eq!(game.status(), Status::Unfinished);
    assert_eq!(game.board().contents(), [Mark::Empty; 9]);
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_players_alternate_starting_with_x() {
    let mut game = GameEngine::new();
    let moves = [(2, 2), (1, 1), (1, 3), (3, 1), (2, 1), (2, 3)];

    for (ply, (row, col)) in moves.into_iter().enumerate() {
        let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_player(), expected);
        game.make_move(row, col).expect("Valid move");
        assert_eq!(game.history()[ply].mark(), expected);
    }
}

#[test]
fn test_occupied_cell_rejected_for_either_player() {
    let mut game = GameEngine::new();
    game.make_move(2, 2).unwrap();

    // O tries X's cell
    assert_eq!(
        game.make_move(2, 2),
        Err(MoveError::CellOccupied { row: 2, col: 2 })
    );

    game.make_move(1, 1).unwrap();

    // X tries O's cell, then its own
    assert_eq!(
        game.make_move(1, 1),
        Err(MoveError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(
        game.make_move(2, 2),
        Err(MoveError::CellOccupied { row: 2, col: 2 })
    );
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = GameEngine::new();
    for (row, col) in [(0, 1), (4, 1), (1, 0), (1, 4), (-1, 2), (2, -1), (0, 0)] {
        assert_eq!(
            game.make_move(row, col),
            Err(MoveError::OutOfRange { row, col })
        );
    }
    assert!(game.history().is_empty());
    assert_eq!(game.board().contents(), [Mark::Empty; 9]);
}

#[test]
fn test_failed_move_is_atomic() {
    let mut game = play(&[(1, 1), (2, 2), (3, 3)]);
    let contents = game.board().contents();
    let history = game.history().to_vec();
    let render = game.render_board();

    for (row, col) in [(1, 1), (2, 2), (0, 2), (3, 4)] {
        assert!(game.make_move(row, col).is_err());
        assert_eq!(game.board().contents(), contents);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.render_board(), render);
        assert_eq!(game.current_player(), Mark::O);
    }
}

#[test]
fn test_x_wins_top_row() {
    let game = play(&[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
    assert_eq!(game.status(), Status::XWins);
    assert_eq!(game.status().to_string(), "X wins");
}

#[test]
fn test_o_wins_diagonal() {
    let game = play(&[(1, 2), (1, 1), (1, 3), (2, 2), (2, 1), (3, 3)]);
    assert_eq!(game.status(), Status::OWins);
    assert_eq!(game.status().to_string(), "O wins");
}

#[test]
fn test_draw() {
    // Ends as X O X / X O O / O X X
    let game = play(&[
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 2),
        (2, 1),
        (2, 3),
        (3, 2),
        (3, 1),
        (3, 3),
    ]);

    use tictactoe::Mark::{O, X};
    assert_eq!(game.board().contents(), [X, O, X, X, O, O, O, X, X]);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw");
}

#[test]
fn test_unfinished_while_cells_remain() {
    let mut game = GameEngine::new();
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 2), (2, 1), (2, 3), (3, 2), (3, 1)] {
        game.make_move(row, col).unwrap();
        assert_eq!(game.status(), Status::Unfinished);
    }
    assert_eq!(game.board().empty_cells().len(), 1);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    // X O X / O X O / O X X: X completes the diagonal with the ninth move
    let game = play(&[
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 1),
        (3, 3),
    ]);
    assert!(game.board().is_full());
    assert_eq!(game.status(), Status::XWins);
}

#[test]
fn test_render_initial_board() {
    assert_eq!(
        new_game().render_board(),
        "---------\n|       |\n|       |\n|       |\n---------"
    );
}

#[test]
fn test_render_depends_only_on_contents() {
    // Same final cells reached in a different order
    let a = play(&[(1, 1), (2, 2), (3, 3), (1, 3)]);
    let b = play(&[(3, 3), (1, 3), (1, 1), (2, 2)]);

    assert_eq!(a.board().contents(), b.board().contents());
    assert_eq!(a.render_board(), b.render_board());
    assert_eq!(
        a.render_board(),
        "---------\n| X   O |\n|   O   |\n|     X |\n---------"
    );
}

#[test]
fn test_history_serializes() {
    let game = play(&[(1, 1), (2, 3)]);
    let json = serde_json::to_string(game.history()).unwrap();
    assert_eq!(
        json,
        r#"[{"coordinate":[1,1],"mark":"X"},{"coordinate":[2,3],"mark":"O"}]"#
    );
}
