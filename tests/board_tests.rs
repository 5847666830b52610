//! Board tests - bounds, locking and line clearing

use tui_blockfall::core::{Board, LockedCell};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_within_bounds() {
    assert!(Board::is_within_bounds(0, 0));
    assert!(Board::is_within_bounds(9, 19));
    assert!(!Board::is_within_bounds(-1, 0));
    assert!(!Board::is_within_bounds(0, -1));
    assert!(!Board::is_within_bounds(BOARD_WIDTH as i8, 0));
    assert!(!Board::is_within_bounds(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();
    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    // Out of bounds is neither occupied nor valid
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_valid(-1, 0));
}

#[test]
fn test_board_lock_cells() {
    let mut board = Board::new();
    let cells = [
        LockedCell { x: 3, y: 5, kind: PieceKind::O },
        LockedCell { x: 4, y: 5, kind: PieceKind::O },
        LockedCell { x: 3, y: 6, kind: PieceKind::O },
        LockedCell { x: 4, y: 6, kind: PieceKind::O },
    ];
    board.lock(&cells);

    for c in cells {
        assert_eq!(board.get(c.x, c.y), Some(Some(PieceKind::O)));
    }
    assert_eq!(board.to_id_grid()[5][3], PieceKind::O.id());
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_clear_row_shifts_down() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.set(0, 3, Some(PieceKind::I));
    board.set(1, 4, Some(PieceKind::O));

    board.clear_row(5);

    assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 3), Some(None));
}

#[test]
fn test_clear_full_lines_bottom_two() {
    let mut board = Board::new();
    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 17, Some(PieceKind::T));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_full_lines_non_adjacent() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);

    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.clear_full_lines(), 3);

    // Each marker drops by the number of cleared rows below it
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_clear_full_lines_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, PieceKind::Z);
    }
    assert_eq!(board.clear_full_lines(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::new();
    board.lock(&[
        LockedCell { x: 2, y: 19, kind: PieceKind::L },
        LockedCell { x: 3, y: 19, kind: PieceKind::L },
    ]);
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.clear();
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_board_cells_flat() {
    let board = Board::new();
    assert_eq!(
        board.cells().len(),
        BOARD_WIDTH as usize * BOARD_HEIGHT as usize
    );
}

#[test]
fn test_board_lock_invalid_cells_does_not_panic() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));

    board.lock(&[
        LockedCell { x: 0, y: 19, kind: PieceKind::O },
        LockedCell { x: BOARD_WIDTH as i8, y: 0, kind: PieceKind::O },
        LockedCell { x: 0, y: -1, kind: PieceKind::O },
        LockedCell { x: i8::MAX, y: i8::MAX, kind: PieceKind::O },
    ]);

    // Occupied target is overwritten, off-board targets are skipped
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 1);
}
