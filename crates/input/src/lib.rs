//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes a
//! non-blocking [`InputSource`](blockfall_core::ports::InputSource) over the
//! terminal event queue.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::handle_key_event;
pub use source::TerminalInput;
