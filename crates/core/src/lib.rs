//! Core game logic module - rules, state and the tick driver
//!
//! Everything here runs against the collaborator traits in [`ports`]; nothing in
//! this crate opens a terminal, reads the keyboard or looks at the wall clock.
//! Given a scripted [`ShapeSource`](ports::ShapeSource) and [`Clock`](ports::Clock)
//! a game is fully reproducible.
//!
//! # Module Structure
//!
//! - [`board`]: 11x20 well with a permanent border rim and row clearing
//! - [`shapes`]: the seven shapes and their precomputed rotation masks
//! - [`piece`]: the moving piece (shape, rotation, anchor)
//! - [`placement`]: the single collision rule every move goes through
//! - [`scoring`]: squared line score, level progression
//! - [`gravity`]: fall interval bookkeeping
//! - [`game_state`]: the session object tying the above together
//! - [`render`]: frame composition against a [`Renderer`](ports::Renderer)
//! - [`runner`]: one iteration of the main loop
//! - [`rng`]: uniform and scripted shape sources
//! - [`config`]: environment overrides for seed and timing
//!
//! # Rules
//!
//! - Shapes are drawn uniformly at random, with no bag
//! - Rotation is a single direction and has no wall kicks
//! - A piece locks as soon as a fall is blocked (no lock delay)
//! - Clearing `k` rows at once scores `k * k`
//! - Every 10 lines raises the level and multiplies the fall interval by 0.8
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::{GameState, SequenceShapes};
//! use blockfall_core::types::{GameAction, ShapeId};
//!
//! let mut game = GameState::new(
//!     SequenceShapes::repeat(ShapeId::BAR),
//!     Duration::from_secs(1),
//!     Duration::ZERO,
//! );
//!
//! game.apply_action(GameAction::MoveRight, Duration::ZERO);
//! game.apply_action(GameAction::HardDrop, Duration::ZERO);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod gravity;
pub mod piece;
pub mod placement;
pub mod ports;
pub mod render;
pub mod rng;
pub mod runner;
pub mod scoring;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use placement::is_valid_placement;
pub use ports::{Clock, InputSource, MonotonicClock, Renderer, ShapeSource};
pub use render::draw_frame;
pub use rng::{SequenceShapes, UniformShapes};
pub use runner::{run_tick, Flow};
pub use scoring::{calculate_line_score, ScoreResult, Stats};
pub use shapes::{get_mask, Mask};
