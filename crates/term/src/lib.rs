//! Terminal renderer module.
//!
//! Implements [`Renderer`](blockfall_core::ports::Renderer) on top of a simple
//! framebuffer flushed through `crossterm`. Board cells are drawn two columns
//! wide; the frame is diffed against the previous one on every refresh.

pub mod fb;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use palette::{cell_glyph, shape_color};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, FRAME_HEIGHT, FRAME_WIDTH};
