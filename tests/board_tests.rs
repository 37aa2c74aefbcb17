//! Board tests - rim, cell access and row clearing

use proptest::prelude::*;

use blockfall::core::{ActivePiece, Board};
use blockfall::types::{CellValue, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

fn locked(id: u8) -> CellValue {
    CellValue::Locked(ShapeId::new(id).unwrap())
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 1..=BOARD_HEIGHT {
        for x in 1..=BOARD_WIDTH {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_rim_is_border() {
    let board = Board::new();
    for y in 1..=BOARD_HEIGHT + 1 {
        assert_eq!(board.cell_at(0, y), CellValue::Border);
        assert_eq!(board.cell_at(BOARD_WIDTH + 1, y), CellValue::Border);
    }
    for x in 0..=BOARD_WIDTH + 1 {
        assert_eq!(board.cell_at(x, BOARD_HEIGHT + 1), CellValue::Border);
    }
    // Above the top is not stored but still answers Border.
    assert_eq!(board.cell_at(5, 0), CellValue::Border);
    assert_eq!(board.cell_at(5, -3), CellValue::Border);
}

#[test]
fn test_set_cell_rejects_rim_and_border_value() {
    let mut board = Board::new();

    assert!(board.set_cell(3, 7, locked(2)));
    assert_eq!(board.cell_at(3, 7), locked(2));

    assert!(!board.set_cell(0, 7, locked(2)));
    assert!(!board.set_cell(BOARD_WIDTH + 1, 7, locked(2)));
    assert!(!board.set_cell(3, BOARD_HEIGHT + 1, CellValue::Empty));
    assert!(!board.set_cell(3, 7, CellValue::Border));

    assert_eq!(board.cell_at(3, 7), locked(2));
    assert_eq!(board.cell_at(0, 7), CellValue::Border);
}

#[test]
fn test_clear_row_shifts_rows_above_in_order() {
    let mut board = Board::from_rows(&[
        "1..........",
        ".2.........",
        "..3........",
        "44444444444",
        "....5......",
    ])
    .unwrap();

    assert!(board.is_row_full(19));
    assert!(board.clear_row(19));

    let expected = Board::from_rows(&[
        "1..........",
        ".2.........",
        "..3........",
        "....5......",
    ])
    .unwrap();
    assert_eq!(board, expected);
    assert_eq!(board.cell_at(0, 1), CellValue::Border);
    assert!(board.row(1).unwrap().iter().all(|c| c.is_empty()));
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new();
    for x in 1..=BOARD_WIDTH {
        board.set_cell(x, 1, locked(7));
    }
    assert!(board.clear_row(1));
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_row_out_of_range() {
    let mut board = Board::new();
    assert!(!board.clear_row(0));
    assert!(!board.clear_row(BOARD_HEIGHT + 1));
}

#[test]
fn test_clear_full_rows_in_non_adjacent() {
    let mut board = Board::from_rows(&[
        "77777777777",
        "6..........",
        "77777777777",
    ])
    .unwrap();

    let cleared = board.clear_full_rows_in(17..=20);
    assert_eq!(cleared.as_slice(), &[18, 20]);
    assert_eq!(board, Board::from_rows(&["6.........."]).unwrap());
}

#[test]
fn test_lock_piece_writes_shape_id() {
    let mut board = Board::new();
    let piece = ActivePiece {
        y: 10,
        ..ActivePiece::spawn(ShapeId::BAR)
    };
    assert!(board.lock_piece(&piece));
    for y in 11..=14 {
        assert_eq!(board.cell_at(5, y), CellValue::Locked(ShapeId::BAR));
    }
    assert_eq!(board.filled_count(), 4);

    // Overlapping lock is refused and leaves the board alone.
    let before = board.clone();
    assert!(!board.lock_piece(&piece));
    assert_eq!(board, before);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Board::from_rows(&["............"]).is_none());
    assert!(Board::from_rows(&["..x........"]).is_none());
    assert!(Board::from_rows(&["..8........"]).is_none());
    assert!(Board::from_rows(&vec!["."; 21]).is_none());
}

proptest! {
    #[test]
    fn cell_outside_playable_area_is_border(x in -40i16..40, y in -40i16..40) {
        let board = Board::new();
        let inside = (1..=BOARD_WIDTH).contains(&x) && (1..=BOARD_HEIGHT).contains(&y);
        if inside {
            prop_assert_eq!(board.cell_at(x, y), CellValue::Empty);
        } else {
            prop_assert_eq!(board.cell_at(x, y), CellValue::Border);
        }
    }

    #[test]
    fn clearing_a_row_moves_only_rows_above(
        cells in proptest::collection::vec((1i16..=BOARD_WIDTH, 1i16..=BOARD_HEIGHT, 1u8..=7), 0..120),
        target in 1i16..=BOARD_HEIGHT,
    ) {
        let mut board = Board::new();
        for &(x, y, id) in &cells {
            board.set_cell(x, y, locked(id));
        }
        let before = board.clone();
        prop_assert!(board.clear_row(target));

        for y in 1..=BOARD_HEIGHT {
            for x in 1..=BOARD_WIDTH {
                let expected = if y > target {
                    before.cell_at(x, y)
                } else if y == 1 {
                    CellValue::Empty
                } else {
                    before.cell_at(x, y - 1)
                };
                prop_assert_eq!(board.cell_at(x, y), expected);
            }
        }
    }
}
