//! Game configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a Knock Out! game backed by [`OneThroughTen`].
///
/// [`OneThroughTen`]: super::rng::OneThroughTen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockOutConfig {
    /// Number of seats. Must be at least 1.
    pub player_count: u32,

    /// Seed for the random source.
    /// Same seed produces the same game.
    pub seed: u64,
}

impl Default for KnockOutConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            seed: 42,
        }
    }
}

impl KnockOutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    pub fn with_player_count(mut self, count: u32) -> Self {
        self.player_count = count;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
