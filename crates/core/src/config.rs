//! Environment-driven settings shared by the binaries
//!
//! Invalid or missing values fall back to defaults silently; configuration
//! mistakes should never keep the game from starting.

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::{DEFAULT_MAZE_SIZE, MAX_MAZE_SIZE, MIN_MAZE_SIZE};

/// Generator settings read from the environment
///
/// - `MAZE_SIZE`: requested grid dimension, kept within
///   [`MIN_MAZE_SIZE`]..=[`MAX_MAZE_SIZE`]; an even value is coerced up by
///   the generator itself.
/// - `MAZE_SEED`: u64 seed for reproducible mazes; absent means entropy.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn from_env() -> Self {
        Self::from_parts(env::var("MAZE_SIZE").ok(), env::var("MAZE_SEED").ok())
    }

    fn from_parts(size: Option<String>, seed: Option<String>) -> Self {
        let size = size
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| (MIN_MAZE_SIZE..=MAX_MAZE_SIZE).contains(v))
            .unwrap_or(DEFAULT_MAZE_SIZE);
        let seed = seed.and_then(|v| v.parse::<u64>().ok());
        Self { size, seed }
    }

    /// Build the generator RNG: seeded when `MAZE_SEED` is set, entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MAZE_SIZE,
            seed: None,
        }
    }
}
