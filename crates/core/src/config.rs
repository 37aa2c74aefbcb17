//! Runtime configuration.
//!
//! Defaults come from the shared constants; environment variables override them:
//!
//! - `BLOCKFALL_SEED`: fixed seed for the shape sequence (default: OS entropy)
//! - `BLOCKFALL_TICK_MS`: sleep between ticks (default 16)
//! - `BLOCKFALL_FALL_MS`: fall interval at level 1 (default 1000)
//!
//! Unparseable or zero values fall back to the default.

use std::env;
use std::time::Duration;

use crate::rng::UniformShapes;
use crate::types::{DEFAULT_FALL_MS, DEFAULT_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub tick: Duration,
    pub fall_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            fall_interval: Duration::from_millis(DEFAULT_FALL_MS),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed = lookup("BLOCKFALL_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        let tick = lookup("BLOCKFALL_TICK_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);
        let fall_interval = lookup("BLOCKFALL_FALL_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.fall_interval);

        Self {
            seed,
            tick,
            fall_interval,
        }
    }

    /// Shape source honouring the configured seed
    pub fn shape_source(&self) -> UniformShapes {
        match self.seed {
            Some(seed) => UniformShapes::seeded(seed),
            None => UniformShapes::from_entropy(),
        }
    }
}
