//! Tests for the tic-tac-toe rules engine.

use strum::IntoEnumIterator;
use t3_engine::{
    GameState, GameStatus, MoveError, Player, Square, available_moves, make_move, new_game,
    status,
};

/// Plays a sequence of moves from a fresh game.
fn play(moves: &[(i64, Player)]) -> GameState {
    moves.iter().fold(new_game(), |state, &(index, player)| {
        make_move(&state, index, player).expect("Valid move")
    })
}

fn x_row_win() -> GameState {
    play(&[
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ])
}

fn draw() -> GameState {
    play(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (5, Player::O),
        (3, Player::X),
        (6, Player::O),
        (4, Player::X),
        (8, Player::O),
        (7, Player::X),
    ])
}

#[test]
fn test_new_game_initial_state() {
    let gs = new_game();
    assert!(gs.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(gs.winner(), None);
    assert!(!gs.is_draw());
    assert_eq!(status(&gs), "in progress");
}

#[test]
fn test_engine_does_not_enforce_turns() {
    let gs = play(&[(0, Player::X), (1, Player::X)]);
    assert_eq!(gs.board().squares()[0], Square::Occupied(Player::X));
    assert_eq!(gs.board().squares()[1], Square::Occupied(Player::X));
    assert_eq!(gs.winner(), None);
    assert!(!gs.is_draw());

    // O may open as well.
    let gs = make_move(&new_game(), 8, Player::O).expect("Valid move");
    assert_eq!(gs.board().squares()[8], Square::Occupied(Player::O));
}

#[test]
fn test_row_win() {
    let gs = x_row_win();
    assert_eq!(gs.winner(), Some(Player::X));
    assert!(!gs.is_draw());
    assert_eq!(status(&gs), "X wins");
}

#[test]
fn test_column_win() {
    let gs = play(&[
        (0, Player::X),
        (1, Player::O),
        (3, Player::X),
        (2, Player::O),
        (6, Player::X),
    ]);
    assert_eq!(gs.winner(), Some(Player::X));
}

#[test]
fn test_diagonal_win_for_o() {
    let gs = play(&[
        (0, Player::X),
        (2, Player::O),
        (1, Player::X),
        (4, Player::O),
        (8, Player::X),
        (6, Player::O),
    ]);
    assert_eq!(gs.winner(), Some(Player::O));
    assert_eq!(status(&gs), "O wins");
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X O X / O X O / O X X: final move at 8 fills the board and wins.
    let gs = play(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::O),
        (7, Player::X),
        (6, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(gs.winner(), Some(Player::X));
    assert!(!gs.is_draw());
}

#[test]
fn test_draw_condition() {
    let gs = draw();
    assert!(gs.is_draw());
    assert_eq!(gs.winner(), None);
    assert_eq!(gs.status(), GameStatus::Draw);
    assert_eq!(status(&gs), "draw");
    assert!(available_moves(&gs).is_empty());
}

#[test]
fn test_terminal_states_reject_every_move() {
    for terminal in [x_row_win(), draw()] {
        for index in -2..12 {
            for player in Player::iter() {
                assert_eq!(
                    make_move(&terminal, index, player),
                    Err(MoveError::GameOver),
                    "index {index}, player {player}"
                );
            }
        }
    }
}

#[test]
fn test_out_of_range_rejected_on_any_board() {
    let boards = [
        new_game(),
        play(&[(4, Player::X)]),
        play(&[(0, Player::X), (1, Player::O), (2, Player::X), (5, Player::O)]),
    ];
    for gs in boards {
        for index in [-100, -1, 9, 10, 99, i64::MIN, i64::MAX] {
            for player in Player::iter() {
                assert_eq!(
                    make_move(&gs, index, player),
                    Err(MoveError::IndexOutOfRange)
                );
            }
        }
    }
}

#[test]
fn test_occupied_cell_rejected_and_state_unchanged() {
    for index in 0..9 {
        let gs = play(&[(index, Player::X)]);
        let snapshot = serde_json::to_vec(&gs).unwrap();
        for player in Player::iter() {
            assert_eq!(make_move(&gs, index, player), Err(MoveError::CellOccupied));
        }
        assert_eq!(serde_json::to_vec(&gs).unwrap(), snapshot);
    }
}

#[test]
fn test_available_moves_updates() {
    let gs = new_game();
    assert_eq!(available_moves(&gs), (0..9).collect::<Vec<_>>());

    for index in 0..9 {
        let after = make_move(&gs, index, Player::X).unwrap();
        let moves = available_moves(&after);
        assert!(!moves.contains(&(index as usize)));
        assert_eq!(moves.len(), 8);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over.");
    assert_eq!(
        MoveError::IndexOutOfRange.to_string(),
        "Index must be in range [0, 8]."
    );
    assert_eq!(MoveError::CellOccupied.to_string(), "Cell already occupied.");
}

#[test]
fn test_serde_round_trip() {
    for gs in [new_game(), play(&[(4, Player::O)]), x_row_win(), draw()] {
        let json = serde_json::to_string(&gs).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gs);
        assert_eq!(back.board(), gs.board());
        assert_eq!(back.winner(), gs.winner());
        assert_eq!(back.is_draw(), gs.is_draw());
    }
}

#[test]
fn test_wire_shape() {
    let gs = play(&[(0, Player::X), (4, Player::O)]);
    let value = serde_json::to_value(gs).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "board": ["X", null, null, null, "O", null, null, null, null],
            "winner": null,
            "is_draw": false,
        })
    );
}
