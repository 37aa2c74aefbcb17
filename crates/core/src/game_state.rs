//! Game state module - the session object owning everything a game mutates
//!
//! Ties together the board, the moving piece, the next-piece preview, statistics,
//! the fall scheduler and the shape source. Every gameplay operation goes through
//! here; the placement validator is consulted before any change to the moving
//! piece, and a failed downward move hands off to the lock-and-clear sequence.

use std::time::Duration;

use crate::board::Board;
use crate::gravity::FallScheduler;
use crate::piece::ActivePiece;
use crate::placement::{fits, is_valid_placement};
use crate::ports::ShapeSource;
use crate::rng::UniformShapes;
use crate::scoring::Stats;
use crate::types::{GameAction, GameStatus, LockEvent, Rotation, ShapeId};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformShapes> {
    board: Board,
    active: ActivePiece,
    next: ShapeId,
    stats: Stats,
    status: GameStatus,
    gravity: FallScheduler,
    shapes: S,
    /// Last lock event (consumed by the tick driver).
    last_event: Option<LockEvent>,
}

impl<S: ShapeSource> GameState<S> {
    /// Start a game on an empty board
    pub fn new(shapes: S, fall_interval: Duration, now: Duration) -> Self {
        Self::with_board(Board::new(), shapes, fall_interval, now)
    }

    /// Start a game on a prepared board.
    ///
    /// The first piece spawns immediately; if the spawn anchor is already
    /// obstructed the game starts out `Over`.
    pub fn with_board(board: Board, mut shapes: S, fall_interval: Duration, now: Duration) -> Self {
        let first = shapes.next_shape();
        let next = shapes.next_shape();
        let active = ActivePiece::spawn(first);
        let status = if fits(&board, &active) {
            GameStatus::Playing
        } else {
            GameStatus::Over
        };

        Self {
            board,
            active,
            next,
            stats: Stats::new(),
            status,
            gravity: FallScheduler::new(fall_interval, now),
            shapes,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next_shape(&self) -> ShapeId {
        self.next
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn fall_interval(&self) -> Duration {
        self.gravity.interval()
    }

    pub fn last_fall(&self) -> Duration {
        self.gravity.last_fall()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Validate a candidate placement against the current board
    pub fn is_valid_placement(&self, shape: ShapeId, rotation: Rotation, x: i16, y: i16) -> bool {
        is_valid_placement(&self.board, shape, rotation, x, y)
    }

    fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Replace the moving piece with `candidate` if it fits.
    ///
    /// Refused unless the game is playing.
    fn try_place(&mut self, candidate: ActivePiece) -> bool {
        if self.is_playing() && fits(&self.board, &candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Try to translate the moving piece; state is untouched on failure
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        self.try_place(self.active.shifted(dx, dy))
    }

    /// Try the next rotation index at the same anchor (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        self.try_place(self.active.rotated())
    }

    /// Drop the moving piece as far as it goes and lock it.
    ///
    /// Returns the number of rows dropped; 0 with no effect unless playing.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_playing() {
            return 0;
        }
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.lock_piece();
        rows
    }

    /// Commit the moving piece, clear completed rows, score and spawn the next piece.
    ///
    /// Returns `None` without touching anything unless the game is playing.
    pub fn lock_piece(&mut self) -> Option<LockEvent> {
        if !self.is_playing() {
            return None;
        }
        let piece = self.active;
        // While playing the moving piece always fits, so its cells are empty.
        let locked = self.board.lock_piece(&piece);
        debug_assert!(locked, "moving piece overlaps the stack");

        // Only rows the piece touched can have become complete.
        let cleared = self.board.clear_full_rows_in(piece.rows_spanned());
        let lines_cleared = cleared.len() as u32;

        let result = self.stats.record_clear(lines_cleared);
        self.gravity.level_up(result.levels_gained);

        let spawned = self.spawn_next();

        let event = LockEvent {
            shape: piece.shape,
            lines_cleared,
            score_gained: result.score_gained,
            level_up: result.levels_gained > 0,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Spawn the pending next piece.
    ///
    /// An obstructed spawn ends the game and keeps the current preview.
    fn spawn_next(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next);
        if !fits(&self.board, &self.active) {
            self.status = GameStatus::Over;
            return false;
        }
        self.next = self.shapes.next_shape();
        true
    }

    /// Toggle between playing and paused; no effect once the game is over.
    ///
    /// Resuming restarts the fall interval from `now`, so paused time never
    /// produces a catch-up fall.
    pub fn toggle_pause(&mut self, now: Duration) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                self.gravity.resume(now);
                true
            }
            GameStatus::Over => false,
        }
    }

    /// Apply one player command.
    ///
    /// Returns whether the command changed anything. `Quit` is left to the tick
    /// driver and is a no-op here.
    pub fn apply_action(&mut self, action: GameAction, now: Duration) -> bool {
        if action == GameAction::Pause {
            return self.toggle_pause(now);
        }

        match self.status {
            GameStatus::Playing => {}
            GameStatus::Paused | GameStatus::Over => return false,
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Pause | GameAction::Quit => false,
        }
    }

    /// Gravity step: move the piece down once per elapsed fall interval.
    ///
    /// A blocked fall locks the piece. Returns whether a fall was attempted.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.is_playing() || !self.gravity.is_due(now) {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.gravity.mark(now);
        true
    }
}
