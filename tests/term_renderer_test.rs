//! Terminal renderer tests - frame composition through the real renderer

use std::time::Duration;

use blockfall::core::ports::Renderer;
use blockfall::core::render::{PANEL_COL, SCORE_ROW, STATUS_ROW};
use blockfall::core::{draw_frame, Board, GameState, SequenceShapes};
use blockfall::term::{cell_glyph, TerminalRenderer, FRAME_HEIGHT, FRAME_WIDTH};
use blockfall::types::{CellValue, GameAction, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

fn game(board: Board) -> GameState<SequenceShapes> {
    GameState::with_board(
        board,
        SequenceShapes::repeat(ShapeId::BAR),
        Duration::from_secs(1),
        Duration::ZERO,
    )
}

fn text_at(r: &TerminalRenderer<Vec<u8>>, row: u16, col: u16, len: usize) -> String {
    r.frame().row_text(row).chars().skip(col as usize).take(len).collect()
}

#[test]
fn frame_fits_board_and_panel() {
    assert!(FRAME_WIDTH > PANEL_COL);
    assert_eq!(FRAME_HEIGHT as i16, BOARD_HEIGHT + 2);
}

#[test]
fn draws_rim_stack_piece_and_stats() {
    let state = game(Board::from_rows(&["3.........."]).unwrap());
    let mut r = TerminalRenderer::with_writer(Vec::new());
    draw_frame(&state, &mut r);

    let (border, _) = cell_glyph(CellValue::Border);
    let (block, _) = cell_glyph(CellValue::Locked(ShapeId::BAR));
    let frame = r.frame();

    // Left and right rim.
    assert_eq!(frame.get(0, 10).unwrap().ch, border[0]);
    assert_eq!(frame.get((BOARD_WIDTH as u16 + 1) * 2, 10).unwrap().ch, border[0]);
    // Locked cell at (1, 20).
    assert_eq!(frame.get(2, 20).unwrap().ch, block[0]);
    // Moving bar at column 5, rows 1..=4.
    assert_eq!(frame.get(10, 1).unwrap().ch, block[0]);
    assert_eq!(frame.get(11, 4).unwrap().ch, block[1]);

    assert_eq!(text_at(&r, SCORE_ROW, PANEL_COL, 8), "Score: 0");
}

#[test]
fn paused_frame_hides_stack() {
    let mut state = game(Board::from_rows(&["3.........."]).unwrap());
    state.apply_action(GameAction::Pause, Duration::ZERO);

    let mut r = TerminalRenderer::with_writer(Vec::new());
    draw_frame(&state, &mut r);

    assert_eq!(r.frame().get(2, 20).unwrap().ch, ' ');
    assert_eq!(r.frame().get(10, 1).unwrap().ch, ' ');
    assert_eq!(text_at(&r, STATUS_ROW, PANEL_COL, 6), "PAUSED");
}

#[test]
fn refresh_writes_to_the_writer() {
    let state = game(Board::new());
    let mut r = TerminalRenderer::with_writer(Vec::new());
    draw_frame(&state, &mut r);
    r.refresh().unwrap();

    let first = r.writer().len();
    assert!(first > 0);

    // Same frame again only emits style resets.
    draw_frame(&state, &mut r);
    r.refresh().unwrap();
    assert!(r.writer().len() - first < 64);

    let bytes = r.into_writer();
    assert!(String::from_utf8_lossy(&bytes).contains("Score: 0"));
}
