//! Tick driver - one iteration of the main loop
//!
//! Order within a tick:
//!
//! 1. Poll at most one pending command (quit short-circuits)
//! 2. Apply it to the game
//! 3. Gravity step
//! 4. Flash if any lock during the tick cleared lines
//! 5. Compose and commit the frame
//!
//! Sleeping between ticks is the caller's business.

use std::io;

use crate::game_state::GameState;
use crate::ports::{Clock, InputSource, Renderer, ShapeSource};
use crate::render::draw_frame;
use crate::types::GameAction;

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run a single tick against the given collaborators
pub fn run_tick<S, I, C, R>(
    state: &mut GameState<S>,
    input: &mut I,
    clock: &C,
    renderer: &mut R,
) -> io::Result<Flow>
where
    S: ShapeSource,
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
    R: Renderer + ?Sized,
{
    // Stale events from a previous frame must not trigger a flash.
    state.take_last_event();

    let mut cleared = false;

    if let Some(action) = input.poll_key()? {
        if action == GameAction::Quit {
            return Ok(Flow::Quit);
        }
        state.apply_action(action, clock.now());
        cleared |= took_lines(state);
    }

    // A hard drop and a gravity lock can both happen in one tick.
    state.tick(clock.now());
    cleared |= took_lines(state);

    if cleared {
        renderer.flash();
    }

    draw_frame(state, renderer);
    renderer.refresh()?;
    Ok(Flow::Continue)
}

/// Consume the pending lock event, reporting whether it cleared lines
fn took_lines<S: ShapeSource>(state: &mut GameState<S>) -> bool {
    state
        .take_last_event()
        .is_some_and(|event| event.lines_cleared > 0)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::board::Board;
    use crate::rng::SequenceShapes;
    use crate::types::{CellValue, GameStatus, ShapeId};

    struct Script(VecDeque<GameAction>);

    impl InputSource for Script {
        fn poll_key(&mut self) -> io::Result<Option<GameAction>> {
            Ok(self.0.pop_front())
        }
    }

    struct FakeClock(Cell<Duration>);

    impl Clock for FakeClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Counter {
        frames: usize,
        flashes: usize,
    }

    impl Renderer for Counter {
        fn clear_screen(&mut self) {}
        fn draw_cell(&mut self, _x: i16, _y: i16, _kind: CellValue) {}
        fn draw_text(&mut self, _row: u16, _col: u16, _text: &str) {}
        fn flash(&mut self) {
            self.flashes += 1;
        }
        fn refresh(&mut self) -> io::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    struct Broken;

    impl InputSource for Broken {
        fn poll_key(&mut self) -> io::Result<Option<GameAction>> {
            Err(io::Error::other("tty gone"))
        }
    }

    fn bars() -> GameState<SequenceShapes> {
        GameState::new(
            SequenceShapes::repeat(ShapeId::BAR),
            Duration::from_secs(1),
            Duration::ZERO,
        )
    }

    #[test]
    fn quit_stops_before_drawing() {
        let mut state = bars();
        let mut input = Script(VecDeque::from([GameAction::Quit]));
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();

        let flow = run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(flow, Flow::Quit);
        assert_eq!(out.frames, 0);
    }

    #[test]
    fn idle_tick_draws_one_frame() {
        let mut state = bars();
        let mut input = Script(VecDeque::new());
        let clock = FakeClock(Cell::new(Duration::from_millis(10)));
        let mut out = Counter::default();

        let flow = run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out.frames, 1);
        assert_eq!(out.flashes, 0);
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn one_command_per_tick() {
        let mut state = bars();
        let mut input = Script(VecDeque::from([GameAction::MoveLeft, GameAction::MoveLeft]));
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();

        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(state.active().x, 3);
        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(state.active().x, 2);
    }

    #[test]
    fn gravity_follows_clock() {
        let mut state = bars();
        let mut input = Script(VecDeque::new());
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();

        clock.0.set(Duration::from_secs(1));
        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn clearing_lines_flashes() {
        let board = Board::from_rows(&["1111.111111"]).unwrap();
        let mut state = GameState::with_board(
            board,
            SequenceShapes::repeat(ShapeId::BAR),
            Duration::from_secs(1),
            Duration::ZERO,
        );
        let mut input = Script(VecDeque::from([GameAction::HardDrop]));
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();

        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(out.flashes, 1);
        assert_eq!(state.lines(), 1);

        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(out.flashes, 1);
    }

    #[test]
    fn flash_survives_gravity_lock_in_same_tick() {
        // Column 6 is walled off above a row missing only its first cell.
        let mut rows = vec![".....1....."; 18];
        rows.push(".1111111111");
        let board = Board::from_rows(&rows).unwrap();
        let o = ShapeId::new(1).unwrap();
        let mut state = GameState::with_board(
            board,
            SequenceShapes::new([ShapeId::BAR, o, o]),
            Duration::from_secs(1),
            Duration::ZERO,
        );
        while state.try_move(-1, 0) {}
        assert_eq!(state.active().x, 0);

        let mut input = Script(VecDeque::from([GameAction::HardDrop]));
        let clock = FakeClock(Cell::new(Duration::from_secs(1)));
        let mut out = Counter::default();

        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();

        // The drop cleared a line, then gravity locked the square where it spawned.
        assert_eq!(state.lines(), 1);
        assert_eq!(state.board().filled_count(), 25);
        assert_eq!(out.flashes, 1);
    }

    #[test]
    fn pause_through_driver() {
        let mut state = bars();
        let mut input = Script(VecDeque::from([GameAction::Pause]));
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();

        run_tick(&mut state, &mut input, &clock, &mut out).unwrap();
        assert_eq!(state.status(), GameStatus::Paused);
    }

    #[test]
    fn input_errors_propagate() {
        let mut state = bars();
        let clock = FakeClock(Cell::new(Duration::ZERO));
        let mut out = Counter::default();
        assert!(run_tick(&mut state, &mut Broken, &clock, &mut out).is_err());
    }
}
