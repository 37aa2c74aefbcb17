//! Non-blocking keyboard source backed by the crossterm event queue.

use std::io;
use std::time::Duration;

use blockfall_core::ports::InputSource;
use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads at most one queued terminal event per poll.
///
/// Non-key events and unmapped keys are consumed and reported as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> io::Result<Option<GameAction>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
