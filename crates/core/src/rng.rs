//! RNG module - shape selection
//!
//! Shapes are drawn independently and uniformly from all seven ids. There is no
//! bag or history: the same shape may come up several times in a row.
//!
//! Also provides a fixed-sequence source for deterministic tests and benches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::ShapeSource;
use crate::types::ShapeId;

/// Uniform random shape source
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: StdRng,
}

impl UniformShapes {
    /// Seed from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self) -> ShapeId {
        ShapeId::ALL[self.rng.random_range(0..ShapeId::ALL.len())]
    }
}

/// Replays a fixed list of shapes, starting over when exhausted
#[derive(Debug, Clone)]
pub struct SequenceShapes {
    shapes: Vec<ShapeId>,
    pos: usize,
}

impl SequenceShapes {
    /// An empty list replays all seven ids in order
    pub fn new(shapes: impl IntoIterator<Item = ShapeId>) -> Self {
        let mut shapes: Vec<ShapeId> = shapes.into_iter().collect();
        if shapes.is_empty() {
            shapes = ShapeId::ALL.to_vec();
        }
        Self { shapes, pos: 0 }
    }

    /// Always the same shape
    pub fn repeat(shape: ShapeId) -> Self {
        Self::new([shape])
    }
}

impl ShapeSource for SequenceShapes {
    fn next_shape(&mut self) -> ShapeId {
        let shape = self.shapes[self.pos % self.shapes.len()];
        self.pos = (self.pos + 1) % self.shapes.len();
        shape
    }
}
