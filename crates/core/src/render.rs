//! Frame composition: turns a game state into renderer calls.
//!
//! Layout (board coordinates for cells, terminal cells for text):
//!
//! - Board and rim at `x = 0..=BOARD_WIDTH + 1`, `y = 1..=BOARD_HEIGHT + 1`
//! - Side panel text starting at column `(BOARD_WIDTH + 3) * CELL_COLUMNS`
//! - Next-piece preview drawn as cells right of the rim, below the "Next" label
//!
//! While paused only border cells are drawn, hiding the stack and the piece.

use crate::game_state::GameState;
use crate::ports::{Renderer, ShapeSource};
use crate::shapes::get_mask;
use crate::types::{
    CellValue, GameStatus, Rotation, BOARD_HEIGHT, BOARD_WIDTH, CELL_COLUMNS,
};

/// First terminal column of the side panel
pub const PANEL_COL: u16 = (BOARD_WIDTH as u16 + 3) * CELL_COLUMNS;

/// Board-space x of the preview anchor
pub const PREVIEW_X: i16 = BOARD_WIDTH + 3;

/// Board-space y of the preview anchor
pub const PREVIEW_Y: i16 = 6;

pub const TITLE_ROW: u16 = 0;
pub const SCORE_ROW: u16 = 1;
pub const LINES_ROW: u16 = 2;
pub const LEVEL_ROW: u16 = 3;
pub const NEXT_ROW: u16 = 5;
pub const STATUS_ROW: u16 = 12;
pub const HELP_ROW: u16 = 14;

const HELP: [&str; 5] = [
    "left/right  move",
    "up          rotate",
    "down/space  drop",
    "p           pause",
    "q           quit",
];

/// Text shown on the status line
pub fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "",
        GameStatus::Paused => "PAUSED",
        GameStatus::Over => "GAME OVER",
    }
}

/// Issue every draw call for one frame. Does not call `refresh`.
pub fn draw_frame<S, R>(state: &GameState<S>, out: &mut R)
where
    S: ShapeSource,
    R: Renderer + ?Sized,
{
    let paused = match state.status() {
        GameStatus::Paused => true,
        GameStatus::Playing | GameStatus::Over => false,
    };

    out.clear_screen();

    let board = state.board();
    for y in 1..=BOARD_HEIGHT + 1 {
        for x in 0..=BOARD_WIDTH + 1 {
            let cell = board.cell_at(x, y);
            if paused && cell != CellValue::Border {
                continue;
            }
            out.draw_cell(x, y, cell);
        }
    }

    if !paused {
        let active = state.active();
        let kind = CellValue::Locked(active.shape);
        for (x, y) in active.cells() {
            out.draw_cell(x, y, kind);
        }
    }

    let stats = state.stats();
    out.draw_text(TITLE_ROW, PANEL_COL, "BLOCKFALL");
    out.draw_text(SCORE_ROW, PANEL_COL, &format!("Score: {}", stats.score));
    out.draw_text(LINES_ROW, PANEL_COL, &format!("Lines: {}", stats.lines));
    out.draw_text(LEVEL_ROW, PANEL_COL, &format!("Level: {}", stats.level));

    out.draw_text(NEXT_ROW, PANEL_COL, "Next:");
    let next = state.next_shape();
    for (lx, ly) in get_mask(next, Rotation::FIRST).cells() {
        out.draw_cell(
            PREVIEW_X + lx as i16,
            PREVIEW_Y + ly as i16,
            CellValue::Locked(next),
        );
    }

    let status = status_text(state.status());
    if !status.is_empty() {
        out.draw_text(STATUS_ROW, PANEL_COL, status);
    }

    for (i, line) in HELP.iter().enumerate() {
        out.draw_text(HELP_ROW + i as u16, PANEL_COL, line);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::Duration;

    use super::*;
    use crate::rng::SequenceShapes;
    use crate::types::{GameAction, ShapeId};

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(i16, i16, CellValue)>,
        texts: Vec<(u16, u16, String)>,
        clears: usize,
    }

    impl Renderer for Recorder {
        fn clear_screen(&mut self) {
            self.clears += 1;
        }
        fn draw_cell(&mut self, x: i16, y: i16, kind: CellValue) {
            self.cells.push((x, y, kind));
        }
        fn draw_text(&mut self, row: u16, col: u16, text: &str) {
            self.texts.push((row, col, text.to_string()));
        }
        fn flash(&mut self) {}
        fn refresh(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn state() -> GameState<SequenceShapes> {
        GameState::new(
            SequenceShapes::new([ShapeId::BAR, ShapeId::new(1).unwrap()]),
            Duration::from_secs(1),
            Duration::ZERO,
        )
    }

    fn on_board(cells: &[(i16, i16, CellValue)]) -> Vec<(i16, i16, CellValue)> {
        cells
            .iter()
            .copied()
            .filter(|&(x, _, _)| x <= BOARD_WIDTH + 1)
            .collect()
    }

    #[test]
    fn playing_frame_draws_board_piece_and_panel() {
        let mut rec = Recorder::default();
        draw_frame(&state(), &mut rec);

        assert_eq!(rec.clears, 1);
        let board_cells = on_board(&rec.cells);
        // Full grid with rim, then the four piece cells.
        let grid = ((BOARD_WIDTH + 2) * (BOARD_HEIGHT + 1)) as usize;
        assert_eq!(board_cells.len(), grid + 4);
        assert!(board_cells.contains(&(0, 1, CellValue::Border)));
        assert!(board_cells.contains(&(5, 1, CellValue::Locked(ShapeId::BAR))));

        // Preview of the square right of the rim.
        let preview: Vec<_> = rec
            .cells
            .iter()
            .filter(|&&(x, _, _)| x > BOARD_WIDTH + 1)
            .collect();
        assert_eq!(preview.len(), 4);

        assert!(rec.texts.iter().any(|(_, _, t)| t == "Score: 0"));
        assert!(rec.texts.iter().any(|(_, _, t)| t == "Level: 1"));
        assert!(!rec.texts.iter().any(|(_, _, t)| t == "PAUSED"));
    }

    #[test]
    fn paused_frame_draws_only_border() {
        let mut s = state();
        s.apply_action(GameAction::Pause, Duration::ZERO);

        let mut rec = Recorder::default();
        draw_frame(&s, &mut rec);

        let board_cells = on_board(&rec.cells);
        assert!(!board_cells.is_empty());
        assert!(board_cells.iter().all(|&(_, _, c)| c == CellValue::Border));
        assert!(rec.texts.iter().any(|(row, _, t)| *row == STATUS_ROW && t == "PAUSED"));
    }

    #[test]
    fn panel_starts_right_of_rim() {
        assert!(PANEL_COL >= (BOARD_WIDTH as u16 + 2) * CELL_COLUMNS);
        assert!(PREVIEW_X > BOARD_WIDTH + 1);
    }
}
