//! Board tests - public API coverage for the grid engine

use blockblast::core::{shape_cells, Board};
use blockblast::types::{ColorTag, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert!(
                board.is_valid(row, col),
                "Cell ({}, {}) should be valid",
                row,
                col
            );
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_fits_iff_every_cell_in_range_and_empty() {
    let mut board = Board::new();
    board.set(2, 2, Some(ColorTag::Pink));

    for kind in [
        ShapeKind::Dot,
        ShapeKind::DuoRow,
        ShapeKind::CornerSe,
        ShapeKind::Plus,
        ShapeKind::PentaRow,
    ] {
        let cells = shape_cells(kind);
        for row in -2..10i8 {
            for col in -2..10i8 {
                let expected = cells
                    .iter()
                    .all(|&(dr, dc)| board.is_valid(row + dr, col + dc));
                assert_eq!(
                    board.fits(cells, row, col),
                    expected,
                    "{:?} at ({}, {})",
                    kind,
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn test_place_marks_every_cell_with_the_shape_color() {
    let mut board = Board::new();
    let cells = shape_cells(ShapeKind::Plus);

    assert_eq!(board.place(cells, 2, 2, ColorTag::Violet), Some(5));
    for &(dr, dc) in cells {
        assert_eq!(board.get(2 + dr, 2 + dc), Some(Some(ColorTag::Violet)));
    }
}

#[test]
fn test_place_then_clear_roundtrip() {
    let mut board = Board::new();

    // A penta row at (0, 0) plus a trio at (0, 5) fills row 0 exactly
    board.place(shape_cells(ShapeKind::PentaRow), 0, 0, ColorTag::Cyan);
    board.place(shape_cells(ShapeKind::TrioRow), 0, 5, ColorTag::Green);
    // A bystander cell that must survive the clear
    board.set(4, 4, Some(ColorTag::Amber));

    let lines = board.full_lines();
    assert_eq!(lines.rows.as_slice(), &[0]);
    assert!(lines.cols.is_empty());

    let cleared = board.clear_lines(&lines);
    assert_eq!(cleared.len(), 8);
    for col in 0..8 {
        assert_eq!(board.get(0, col), Some(None));
    }
    assert_eq!(board.get(4, 4), Some(Some(ColorTag::Amber)));
}

#[test]
fn test_full_lines_idempotent_without_mutation() {
    let mut board = Board::new();
    for col in 0..8 {
        board.set(2, col, Some(ColorTag::Cyan));
        board.set(6, col, Some(ColorTag::Pink));
    }
    for row in 0..8 {
        board.set(row, 1, Some(ColorTag::Green));
    }

    let first = board.full_lines();
    let second = board.full_lines();
    assert_eq!(first, second);
    assert_eq!(first.rows.as_slice(), &[2, 6]);
    assert_eq!(first.cols.as_slice(), &[1]);
    assert_eq!(first.total(), 3);
}

#[test]
fn test_cell_counts_toward_row_and_column_simultaneously() {
    let mut board = Board::new();
    for col in 0..8 {
        board.set(3, col, Some(ColorTag::Amber));
    }
    for row in 0..8 {
        board.set(row, 3, Some(ColorTag::Amber));
    }

    let lines = board.full_lines();
    assert_eq!(lines.rows.as_slice(), &[3]);
    assert_eq!(lines.cols.as_slice(), &[3]);

    // 16 line cells minus the shared intersection, reported once
    let cleared = board.clear_lines(&lines);
    assert_eq!(cleared.len(), 15);
    assert!(board.is_empty());
}

#[test]
fn test_full_board_detects_all_sixteen_lines() {
    let mut board = Board::new();
    for row in 0..8 {
        for col in 0..8 {
            board.set(row, col, Some(ColorTag::Cyan));
        }
    }

    let lines = board.full_lines();
    assert_eq!(lines.total(), 16);

    let cleared = board.clear_lines(&lines);
    assert_eq!(cleared.len(), 64);
    assert!(board.is_empty());
}

#[test]
fn test_rejected_place_has_no_side_effects() {
    let mut board = Board::new();
    board.set(0, 2, Some(ColorTag::Green));
    let before = board.clone();

    // Overlaps the occupied cell
    assert_eq!(
        board.place(shape_cells(ShapeKind::TrioRow), 0, 0, ColorTag::Pink),
        None
    );
    // Pokes out of the right edge
    assert_eq!(
        board.place(shape_cells(ShapeKind::PentaRow), 1, 4, ColorTag::Pink),
        None
    );
    assert_eq!(board, before);
}
