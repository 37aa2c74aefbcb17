//! Board module - manages the game grid
//!
//! The playable area is 11x20, addressed 1-indexed: x ranges 1..=11 (left to right),
//! y ranges 1..=20 (top to bottom). Storage carries a rim one cell beyond the left,
//! right and bottom edges that always holds [`CellValue::Border`], so collision probes
//! never need bounds arithmetic. Any probe outside the stored grid (including above
//! the top row) also answers `Border`.
//!
//! Uses a flat array for cache locality and zero allocation.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{CellValue, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

/// Stored columns: playable width plus left and right rim
const STRIDE: usize = (BOARD_WIDTH + 2) as usize;

/// Stored rows: playable height plus bottom rim
const ROWS: usize = (BOARD_HEIGHT + 1) as usize;

const BOARD_SIZE: usize = STRIDE * ROWS;

/// The game board with its U-shaped border rim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells, `(y - 1) * STRIDE + x`
    cells: [CellValue; BOARD_SIZE],
}

impl Board {
    /// Create an empty board with its rim in place
    pub fn new() -> Self {
        let mut board = Self {
            cells: [CellValue::Empty; BOARD_SIZE],
        };
        board.paint_rim();
        board
    }

    fn paint_rim(&mut self) {
        for y in 1..=BOARD_HEIGHT + 1 {
            for x in 0..=BOARD_WIDTH + 1 {
                if !Self::is_playable(x, y) {
                    if let Some(idx) = Self::index(x, y) {
                        self.cells[idx] = CellValue::Border;
                    }
                }
            }
        }
    }

    /// Flat index of a stored cell (playable or rim)
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x > BOARD_WIDTH + 1 || y < 1 || y > BOARD_HEIGHT + 1 {
            return None;
        }
        Some((y as usize - 1) * STRIDE + x as usize)
    }

    /// Whether `(x, y)` lies inside the playable rectangle
    #[inline(always)]
    pub fn is_playable(x: i16, y: i16) -> bool {
        (1..=BOARD_WIDTH).contains(&x) && (1..=BOARD_HEIGHT).contains(&y)
    }

    pub fn width(&self) -> i16 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i16 {
        BOARD_HEIGHT
    }

    /// Cell at `(x, y)`; `Border` anywhere outside the playable rectangle
    pub fn cell_at(&self, x: i16, y: i16) -> CellValue {
        if !Self::is_playable(x, y) {
            return CellValue::Border;
        }
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or(CellValue::Border)
    }

    /// Set a playable cell.
    ///
    /// Returns false (and changes nothing) for rim or out-of-range coordinates and
    /// for the `Border` value.
    pub fn set_cell(&mut self, x: i16, y: i16, value: CellValue) -> bool {
        if value == CellValue::Border || !Self::is_playable(x, y) {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within the playable area and empty
    pub fn is_empty(&self, x: i16, y: i16) -> bool {
        self.cell_at(x, y).is_empty()
    }

    /// Check if a playable row is completely filled
    pub fn is_row_full(&self, y: i16) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Playable cells of row `y`, left to right
    pub fn row(&self, y: i16) -> Option<&[CellValue]> {
        if !(1..=BOARD_HEIGHT).contains(&y) {
            return None;
        }
        let start = Self::index(1, y)?;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Playable rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = (i16, &[CellValue])> + '_ {
        (1..=BOARD_HEIGHT).filter_map(move |y| self.row(y).map(|row| (y, row)))
    }

    /// Remove row `y` and shift every row above it down by one.
    ///
    /// Row 1 becomes empty. Returns false if `y` is not a playable row.
    pub fn clear_row(&mut self, y: i16) -> bool {
        if !(1..=BOARD_HEIGHT).contains(&y) {
            return false;
        }

        // Whole stored rows move; rim columns are identical in every row.
        for row in (1..y).rev() {
            let src = (row as usize - 1) * STRIDE;
            let dst = row as usize * STRIDE;
            self.cells.copy_within(src..src + STRIDE, dst);
        }

        for x in 1..=BOARD_WIDTH {
            if let Some(idx) = Self::index(x, 1) {
                self.cells[idx] = CellValue::Empty;
            }
        }

        true
    }

    /// Clear every full row among `candidates`.
    ///
    /// Candidates must be distinct. Full rows are cleared top to bottom; clearing a
    /// row only moves rows above it, so lower rows keep their positions. Returns the
    /// cleared rows in ascending order.
    pub fn clear_full_rows_in(
        &mut self,
        candidates: impl IntoIterator<Item = i16>,
    ) -> ArrayVec<i16, 4> {
        let mut full: ArrayVec<i16, 4> = candidates
            .into_iter()
            .filter(|&y| self.is_row_full(y))
            .take(4)
            .collect();
        full.sort_unstable();

        for &y in &full {
            self.clear_row(y);
        }
        full
    }

    /// Write every occupied cell of `piece` as locked.
    ///
    /// Returns false without touching the board if any target cell is not empty.
    pub fn lock_piece(&mut self, piece: &ActivePiece) -> bool {
        if !piece.cells().all(|(x, y)| self.is_empty(x, y)) {
            return false;
        }
        let value = CellValue::Locked(piece.shape);
        for (x, y) in piece.cells() {
            self.set_cell(x, y, value);
        }
        true
    }

    /// Reset every playable cell to empty
    pub fn clear(&mut self) {
        for y in 1..=BOARD_HEIGHT {
            for x in 1..=BOARD_WIDTH {
                self.set_cell(x, y, CellValue::Empty);
            }
        }
    }

    /// Number of locked cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows()
            .map(|(_, row)| row.iter().filter(|c| !c.is_empty()).count())
            .sum()
    }

    /// Build a board from text rows aligned to the bottom of the playfield.
    ///
    /// `.` is empty and `1`..`7` are locked shape ids. Returns None for rows wider
    /// than the board, more rows than the board or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > BOARD_HEIGHT as usize {
            return None;
        }
        let mut board = Self::new();
        let top = BOARD_HEIGHT - rows.len() as i16 + 1;
        for (dy, line) in rows.iter().enumerate() {
            if line.chars().count() > BOARD_WIDTH as usize {
                return None;
            }
            for (dx, ch) in line.chars().enumerate() {
                let value = match ch {
                    '.' => CellValue::Empty,
                    d => {
                        let id = d.to_digit(10)?;
                        CellValue::Locked(ShapeId::new(id as u8)?)
                    }
                };
                board.set_cell(dx as i16 + 1, top + dy as i16, value);
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
