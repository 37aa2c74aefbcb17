//! Collaborator interfaces consumed by the engine
//!
//! The engine never touches the terminal, the keyboard, the system clock or an
//! entropy source directly. The bootstrap binds concrete implementations of these
//! traits; tests bind scripted ones.

use std::io;
use std::time::{Duration, Instant};

use crate::types::{CellValue, GameAction, ShapeId};

/// Output surface for one frame.
///
/// Board cells are addressed in board coordinates (the rim included); text is
/// addressed in terminal character cells. Nothing is shown until [`refresh`].
///
/// [`refresh`]: Renderer::refresh
pub trait Renderer {
    fn clear_screen(&mut self);
    fn draw_cell(&mut self, x: i16, y: i16, kind: CellValue);
    fn draw_text(&mut self, row: u16, col: u16, text: &str);
    /// Brief visual/audible alert, signalled when a lock clears lines
    fn flash(&mut self);
    /// Commit the frame
    fn refresh(&mut self) -> io::Result<()>;
}

/// Non-blocking source of player commands
pub trait InputSource {
    /// At most one pending command; `Ok(None)` immediately when nothing is queued
    fn poll_key(&mut self) -> io::Result<Option<GameAction>>;
}

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Supplier of upcoming shapes
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeId;
}

/// [`Clock`] backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
