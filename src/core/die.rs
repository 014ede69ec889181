//! A die backed by an injected [`RandomSource`].
//!
//! `roll()` maps a raw draw to a face with `draw % sides + 1`. Any `u32` the
//! source returns lands in `1..=sides`, but the faces are only uniform when
//! the source range length is a multiple of `sides`. With the `1..=10` source
//! and six sides, faces 1 to 4 come up twice as often as 5 and 6.

use std::fmt;

use super::error::{KnockOutError, Result};
use super::rng::RandomSource;

/// Sides on the die Knock Out! plays with.
pub const STANDARD_SIDES: u32 = 6;

/// A die with a fixed number of sides.
pub struct Die {
    sides: u32,
    source: Box<dyn RandomSource>,
}

impl Die {
    /// Create a die. Fails if `sides` is zero.
    pub fn new(sides: u32, source: impl RandomSource + 'static) -> Result<Self> {
        Self::from_boxed(sides, Box::new(source))
    }

    /// Create a die from an already boxed source.
    pub fn from_boxed(sides: u32, source: Box<dyn RandomSource>) -> Result<Self> {
        if sides == 0 {
            return Err(KnockOutError::invalid("a die needs at least one side"));
        }
        Ok(Self { sides, source })
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once. The result is in `1..=sides`.
    pub fn roll(&mut self) -> Result<u32> {
        Ok(self.source.draw()? % self.sides + 1)
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Die")
            .field("sides", &self.sides)
            .field("source", &self.source)
            .finish()
    }
}
