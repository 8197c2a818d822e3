//! Tests for the board state machine.

use gridmark_core::{Board, Cell, GameOutcome, GridError, Mark, Player};
use std::sync::Arc;

fn classic_pair() -> (Arc<Player>, Arc<Player>) {
    (Player::shared(Mark::ClassicX), Player::shared(Mark::ClassicO))
}

fn board_3x3() -> (Board, Arc<Player>, Arc<Player>) {
    let (x, o) = classic_pair();
    let board = Board::new([x.clone(), o.clone()], 3).expect("valid board");
    (board, x, o)
}

/// Fills a board from a row-major layout, `None` meaning empty.
fn fill(board: &mut Board, layout: &[Option<&Arc<Player>>]) {
    for (index, player) in layout.iter().enumerate() {
        if let Some(player) = player {
            board.place_mark(player, index + 1).expect("legal placement");
        }
    }
}

#[test]
fn test_construct_yields_empty_cells_for_every_side() {
    for side in 1..=8 {
        let (x, o) = classic_pair();
        let board = Board::new([x, o], side).expect("valid board");
        assert_eq!(board.snapshot().len(), side * side);
        assert!(board.snapshot().iter().all(Cell::is_empty));
    }
}

#[test]
fn test_duplicate_marks_rejected() {
    let result = Board::new(
        [Player::shared(Mark::ClassicX), Player::shared(Mark::ClassicX)],
        3,
    );
    assert!(matches!(result, Err(GridError::DuplicateMarks(Mark::ClassicX))));
}

#[test]
fn test_invalid_size_rejected() {
    let (x, _) = classic_pair();
    assert!(matches!(Board::new([x], 0), Err(GridError::InvalidSize(0))));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_overflowing_side_rejected() {
    let (x, _) = classic_pair();
    let side = (1usize << 32) + 1;
    assert!(matches!(Board::new([x], side), Err(GridError::InvalidSize(s)) if s == side));
}

#[test]
fn test_side_bounds() {
    let (x, _) = classic_pair();
    let past_max = Board::MAX_SIDE + 1;
    assert!(matches!(
        Board::new([x.clone()], past_max),
        Err(GridError::InvalidSize(s)) if s == past_max
    ));
    assert!(matches!(
        Board::new([x], usize::MAX),
        Err(GridError::InvalidSize(usize::MAX))
    ));
}

#[test]
fn test_empty_roster_rejected() {
    assert!(matches!(
        Board::new(Vec::<Arc<Player>>::new(), 3),
        Err(GridError::EmptyRoster)
    ));
}

#[test]
fn test_position_boundaries() {
    let (mut board, x, _) = board_3x3();

    assert_eq!(
        board.place_mark(&x, 0),
        Err(GridError::PositionOutOfRange { position: 0, max: 9 })
    );
    assert_eq!(
        board.place_mark(&x, 10),
        Err(GridError::PositionOutOfRange { position: 10, max: 9 })
    );
    assert_eq!(board.place_mark(&x, 1), Ok(()));
    assert_eq!(board.place_mark(&x, 9), Ok(()));
}

#[test]
fn test_unknown_player_rejected_by_identity() {
    let (mut board, _, _) = board_3x3();
    let impostor = Player::shared(Mark::ClassicX);
    assert_eq!(
        board.place_mark(&impostor, 1),
        Err(GridError::UnknownPlayer(Mark::ClassicX))
    );
}

#[test]
fn test_occupied_position_rejected() {
    let (mut board, x, o) = board_3x3();
    board.place_mark(&x, 5).unwrap();
    assert_eq!(board.place_mark(&o, 5), Err(GridError::PositionOccupied(5)));
    assert_eq!(board.place_mark(&x, 5), Err(GridError::PositionOccupied(5)));
}

#[test]
fn test_placement_shows_in_snapshot() {
    for position in 1..=9 {
        let (mut board, _, o) = board_3x3();
        board.place_mark(&o, position).unwrap();

        for (index, cell) in board.snapshot().iter().enumerate() {
            if index == position - 1 {
                assert_eq!(*cell, Cell::Occupied(Mark::ClassicO));
            } else {
                assert_eq!(*cell, Cell::Empty);
            }
        }
    }
}

#[test]
fn test_occupation_is_monotonic() {
    let (mut board, x, o) = board_3x3();
    let order = [5, 1, 9, 3, 7, 2, 8, 4, 6];
    let mut history: Vec<Vec<Cell>> = vec![board.snapshot().to_vec()];

    for (turn, position) in order.into_iter().enumerate() {
        let player = if turn % 2 == 0 { &x } else { &o };
        board.place_mark(player, position).expect("legal placement");
        let current = board.snapshot().to_vec();
        assert_eq!(current.len(), 9);

        let previous = history.last().unwrap();
        for (old, new) in previous.iter().zip(&current) {
            if !old.is_empty() {
                assert_eq!(old, new);
            }
        }
        history.push(current);
    }
}

#[test]
fn test_no_turn_enforcement() {
    let (mut board, x, _) = board_3x3();
    assert!(board.place_mark(&x, 1).is_ok());
    assert!(board.place_mark(&x, 2).is_ok());
}

#[test]
fn test_row_win() {
    let (mut board, x, _) = board_3x3();
    board.place_mark(&x, 1).unwrap();
    board.place_mark(&x, 2).unwrap();
    assert_eq!(board.evaluate(), GameOutcome::Continue);
    board.place_mark(&x, 3).unwrap();
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
fn test_main_diagonal_win() {
    let (mut board, x, _) = board_3x3();
    for position in [1, 5, 9] {
        board.place_mark(&x, position).unwrap();
    }
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
fn test_anti_diagonal_win() {
    let (mut board, x, _) = board_3x3();
    for position in [3, 5, 7] {
        board.place_mark(&x, position).unwrap();
    }
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
#[rustfmt::skip]
fn test_column_win_for_second_player() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&x), Some(&o), None,
            Some(&x), Some(&o), None,
            None, Some(&o), Some(&x),
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Win(o));
}

#[test]
#[rustfmt::skip]
fn test_tie() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&x), Some(&o), Some(&o),
            Some(&o), Some(&x), Some(&x),
            Some(&x), Some(&x), Some(&o),
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Tie);
}

#[test]
#[rustfmt::skip]
fn test_continue_with_open_cells() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&x), Some(&o), Some(&x),
            None, Some(&o), None,
            Some(&o), Some(&x), None,
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Continue);
}

#[test]
#[rustfmt::skip]
fn test_win_on_full_board_beats_tie() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&x), Some(&x), Some(&x),
            Some(&o), Some(&o), Some(&x),
            Some(&o), Some(&x), Some(&o),
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
#[rustfmt::skip]
fn test_scan_order_picks_first_row() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&o), Some(&o), Some(&o),
            None, None, None,
            Some(&x), Some(&x), Some(&x),
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Win(o));
}

#[test]
#[rustfmt::skip]
fn test_scan_order_picks_first_column() {
    let (mut board, x, o) = board_3x3();
    fill(
        &mut board,
        &[
            Some(&x), None, Some(&o),
            Some(&x), None, Some(&o),
            Some(&x), None, Some(&o),
        ],
    );
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
fn test_evaluate_is_idempotent() {
    let (mut board, x, o) = board_3x3();
    let order = [
        (&x, 1),
        (&o, 5),
        (&x, 2),
        (&o, 3),
        (&x, 7),
        (&o, 4),
        (&x, 6),
        (&o, 9),
        (&x, 8),
    ];

    assert_eq!(board.evaluate(), board.evaluate());
    for (player, position) in order {
        board.place_mark(player, position).unwrap();
        let first = board.evaluate();
        let second = board.evaluate();
        assert_eq!(first, second);
    }
    assert_eq!(board.evaluate(), GameOutcome::Tie);
}

#[test]
fn test_larger_board_needs_full_line() {
    let (x, o) = classic_pair();
    let mut board = Board::new([x.clone(), o], 4).unwrap();
    for position in [4, 7, 10] {
        board.place_mark(&x, position).unwrap();
    }
    assert_eq!(board.evaluate(), GameOutcome::Continue);
    board.place_mark(&x, 13).unwrap();
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
fn test_single_cell_board() {
    let x = Player::shared(Mark::ModernX);
    let mut board = Board::new([x.clone()], 1).unwrap();
    assert_eq!(board.evaluate(), GameOutcome::Continue);
    board.place_mark(&x, 1).unwrap();
    assert_eq!(board.evaluate(), GameOutcome::Win(x));
}

#[test]
fn test_three_player_roster() {
    let players = [
        Player::shared(Mark::ClassicX),
        Player::shared(Mark::ClassicO),
        Player::shared(Mark::ModernX),
    ];
    let mut board = Board::new(players.iter().cloned(), 3).unwrap();
    for position in [2, 5, 8] {
        board.place_mark(&players[2], position).unwrap();
    }
    assert_eq!(board.evaluate(), GameOutcome::Win(players[2].clone()));
}
