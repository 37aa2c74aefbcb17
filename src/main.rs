//! Terminal blockfall runner (default binary).
//!
//! Reads configuration from the environment, takes over the terminal, and runs
//! the tick loop until the player quits. The terminal is restored on every exit
//! path before anything is printed.

use std::thread;

use anyhow::{bail, Context, Result};
use crossterm::terminal;

use blockfall::core::{run_tick, Flow, GameConfig, GameState, MonotonicClock};
use blockfall::core::ports::Clock;
use blockfall::core::scoring::Stats;
use blockfall::input::TerminalInput;
use blockfall::term::{TerminalRenderer, FRAME_HEIGHT, FRAME_WIDTH};

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let (w, h) = terminal::size().context("querying terminal size")?;
    if w < FRAME_WIDTH || h < FRAME_HEIGHT {
        bail!("terminal too small: need {FRAME_WIDTH}x{FRAME_HEIGHT}, have {w}x{h}");
    }

    let mut term = TerminalRenderer::enter().context("entering raw mode")?;
    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        eprintln!("[blockfall] failed to restore terminal: {err:#}");
    }

    let stats = result?;
    eprintln!(
        "[blockfall] score {} | lines {} | level {}",
        stats.score, stats.lines, stats.level
    );
    Ok(())
}

fn run(config: &GameConfig, term: &mut TerminalRenderer) -> Result<Stats> {
    let clock = MonotonicClock::new();
    let mut input = TerminalInput::new();
    let mut game = GameState::new(config.shape_source(), config.fall_interval, clock.now());

    loop {
        match run_tick(&mut game, &mut input, &clock, term).context("tick failed")? {
            Flow::Continue => thread::sleep(config.tick),
            Flow::Quit => return Ok(game.stats()),
        }
    }
}
