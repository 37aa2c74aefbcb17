//! Shapes module - the seven shape masks and their precomputed rotations
//!
//! Each shape is defined once in its spawn orientation and expanded into four
//! quarter-turn variants the first time the table is requested. Play never
//! performs rotation math; it only looks variants up.
//!
//! Local coordinates are 1-indexed: `(1, 1)` is the top-left cell of a mask's
//! bounding box, `x` counts columns and `y` counts rows.

use std::sync::OnceLock;

use crate::types::{Rotation, ShapeId, ROTATION_COUNT, SHAPE_COUNT};

/// Largest bounding-box side of any shape
const MAX_SPAN: usize = 4;

/// Spawn orientations, indexed by `ShapeId::index()`
const BASE_SHAPES: [&[&str]; SHAPE_COUNT as usize] = [
    &["##", "##"],
    &["###", ".#."],
    &[".##", "##."],
    &["#", "#", "#", "#"],
    &["##.", ".##"],
    &["#.", "#.", "##"],
    &[".#", ".#", "##"],
];

/// Occupancy mask over a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    width: u8,
    height: u8,
    grid: [[bool; MAX_SPAN]; MAX_SPAN],
}

impl Mask {
    fn blank(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            grid: [[false; MAX_SPAN]; MAX_SPAN],
        }
    }

    /// Build a mask from text rows where `#` marks an occupied cell.
    ///
    /// Rows and columns beyond four cells are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len().min(MAX_SPAN);
        let width = rows
            .iter()
            .take(height)
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_SPAN);

        let mut mask = Self::blank(width as u8, height as u8);
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, ch) in row.chars().take(width).enumerate() {
                mask.grid[r][c] = ch == '#';
            }
        }
        mask
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether local cell `(x, y)` is occupied; anything outside the box is not
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 1 || y < 1 || x > self.width as i8 || y > self.height as i8 {
            return false;
        }
        self.grid[(y - 1) as usize][(x - 1) as usize]
    }

    /// Occupied local cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + Clone + '_ {
        (1..=self.height as i8).flat_map(move |y| {
            (1..=self.width as i8)
                .filter(move |&x| self.is_occupied(x, y))
                .map(move |x| (x, y))
        })
    }

    /// Quarter turn counter-clockwise.
    ///
    /// For a source of `H` rows and `W` columns the result has `W` rows and
    /// `H` columns, with `new(row r, col c) = src(row c, col W + 1 - r)`.
    pub fn rotated(&self) -> Self {
        let w = self.width as i8;
        let mut out = Self::blank(self.height, self.width);
        for r in 1..=out.height as i8 {
            for c in 1..=out.width as i8 {
                out.grid[(r - 1) as usize][(c - 1) as usize] = self.is_occupied(w + 1 - r, c);
            }
        }
        out
    }
}

/// All shapes with their four rotation variants
#[derive(Debug, Clone)]
pub struct ShapeTable {
    rotations: [[Mask; ROTATION_COUNT as usize]; SHAPE_COUNT as usize],
}

impl ShapeTable {
    /// Expand every base shape into its rotation variants
    pub fn build() -> Self {
        let rotations = std::array::from_fn(|i| {
            let base = Mask::from_rows(BASE_SHAPES[i]);
            let mut variants = [base; ROTATION_COUNT as usize];
            for slot in 1..variants.len() {
                variants[slot] = variants[slot - 1].rotated();
            }
            variants
        });
        Self { rotations }
    }

    pub fn rotations_of(&self, shape: ShapeId) -> &[Mask; ROTATION_COUNT as usize] {
        &self.rotations[shape.index()]
    }

    pub fn mask(&self, shape: ShapeId, rotation: Rotation) -> &Mask {
        &self.rotations[shape.index()][rotation.slot()]
    }
}

static TABLE: OnceLock<ShapeTable> = OnceLock::new();

/// Process-wide shape table, built on first use
pub fn shape_table() -> &'static ShapeTable {
    TABLE.get_or_init(ShapeTable::build)
}

/// The four rotation variants of a shape
pub fn rotations_of(shape: ShapeId) -> &'static [Mask; ROTATION_COUNT as usize] {
    shape_table().rotations_of(shape)
}

/// Mask of a shape at the given rotation index
pub fn get_mask(shape: ShapeId, rotation: Rotation) -> &'static Mask {
    shape_table().mask(shape, rotation)
}
