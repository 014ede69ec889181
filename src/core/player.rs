//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Player ids are 1-based: the first seat is `PlayerId(1)`.
//!
//! ## Player
//!
//! A player's knockout number is fixed when it is created. Score and
//! elimination only change through the game that owns the player.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::{KnockOutError, Result};
use super::rng::RandomSource;

/// Knockout numbers a player can be assigned.
pub const KNOCKOUT_NUMBERS: RangeInclusive<u32> = 6..=9;

/// Player identifier, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Iterate over the ids of a roster with `player_count` seats.
    ///
    /// ```
    /// use knockout::core::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: u32) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat in a Knock Out! game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    knockout_number: u32,
    score: u32,
    eliminated: bool,
}

impl Player {
    /// Create a player, drawing its knockout number uniformly from `source`.
    ///
    /// With a `1..=10` source, draws 1 to 8 map to 6, 7, 8, 9, 6, 7, 8, 9 and
    /// draws of 9 or 10 are redrawn.
    pub fn new(id: PlayerId, source: &mut dyn RandomSource) -> Result<Self> {
        let span = KNOCKOUT_NUMBERS.end() - KNOCKOUT_NUMBERS.start() + 1;
        let knockout_number = KNOCKOUT_NUMBERS.start() + source.draw_below(span)?;
        Self::with_knockout_number(id, knockout_number)
    }

    /// Create a player with a chosen knockout number.
    ///
    /// Fails unless `knockout_number` is in `6..=9`.
    pub fn with_knockout_number(id: PlayerId, knockout_number: u32) -> Result<Self> {
        if !KNOCKOUT_NUMBERS.contains(&knockout_number) {
            return Err(KnockOutError::invalid(format!(
                "knockout number {knockout_number} for {id} is outside 6..=9"
            )));
        }

        Ok(Self {
            id,
            knockout_number,
            score: 0,
            eliminated: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn knockout_number(&self) -> u32 {
        self.knockout_number
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }
}
