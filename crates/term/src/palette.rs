//! Glyphs and colors for board cells.
//!
//! A board cell is two terminal columns wide to compensate for glyph aspect ratio.

use crate::fb::{CellStyle, Rgb};
use crate::types::{CellValue, ShapeId};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Two-column glyph and style for a cell value
pub fn cell_glyph(kind: CellValue) -> ([char; 2], CellStyle) {
    match kind {
        CellValue::Empty => (
            [' ', ' '],
            CellStyle {
                fg: Rgb::new(90, 90, 100),
                bg: WELL_BG,
                bold: false,
            },
        ),
        CellValue::Border => (
            ['▓', '▓'],
            CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
        ),
        CellValue::Locked(shape) => (
            ['█', '█'],
            CellStyle {
                fg: shape_color(shape),
                bg: WELL_BG,
                bold: true,
            },
        ),
    }
}

/// Per-shape color, by shape id 1..=7 (O T S I Z L J)
pub fn shape_color(shape: ShapeId) -> Rgb {
    match shape.get() {
        1 => Rgb::new(240, 220, 80),
        2 => Rgb::new(200, 120, 220),
        3 => Rgb::new(100, 220, 120),
        4 => Rgb::new(80, 220, 220),
        5 => Rgb::new(220, 80, 80),
        6 => Rgb::new(255, 165, 0),
        _ => Rgb::new(80, 120, 220),
    }
}
