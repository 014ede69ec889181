//! Injectable random number sources.
//!
//! Every random decision in a game (knockout numbers, die faces) goes through
//! a [`RandomSource`], so a test can swap in [`ScriptedSource`] and replay an
//! exact game.
//!
//! ## Sources
//!
//! - [`OneThroughTen`]: uniform over `1..=10`, backed by a seeded ChaCha8
//!   generator. Same seed, same sequence.
//! - [`ScriptedSource`]: replays a fixed list of values, optionally cycling.
//!   A non-cycling script fails once it runs out.
//!
//! ```
//! use knockout::core::{OneThroughTen, RandomSource};
//!
//! let mut a = OneThroughTen::new(42);
//! let mut b = OneThroughTen::new(42);
//! assert_eq!(a.draw().unwrap(), b.draw().unwrap());
//! ```

use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{KnockOutError, Result};

/// Smallest value the shipped sources produce.
pub const SOURCE_MIN: u32 = 1;
/// Largest value the shipped sources produce.
pub const SOURCE_MAX: u32 = 10;

/// A capability producing integers in a fixed inclusive range.
pub trait RandomSource: Debug {
    /// Draw the next value.
    fn draw(&mut self) -> Result<u32>;

    /// The inclusive range `draw` is expected to stay within.
    fn range(&self) -> RangeInclusive<u32> {
        SOURCE_MIN..=SOURCE_MAX
    }

    /// Draw a value uniformly from `0..count`.
    ///
    /// Draws are offset by the start of [`RandomSource::range`]. Offsets at or
    /// past the largest multiple of `count` that fits in the range are
    /// rejected and redrawn, as are values outside the range. Fails after
    /// [`MAX_REDRAWS`] rejected draws in a row, or if `count` is zero or
    /// wider than the range.
    fn draw_below(&mut self, count: u32) -> Result<u32> {
        let range = self.range();
        let span = u64::from(*range.end()) - u64::from(*range.start()) + 1;
        if count == 0 || u64::from(count) > span {
            return Err(KnockOutError::invalid(format!(
                "cannot draw uniformly from {count} values with a source over {range:?}"
            )));
        }

        let usable = span - span % u64::from(count);
        for _ in 0..=MAX_REDRAWS {
            let value = self.draw()?;
            if !range.contains(&value) {
                continue;
            }
            let offset = u64::from(value - range.start());
            if offset < usable {
                return Ok((offset % u64::from(count)) as u32);
            }
        }

        Err(KnockOutError::RandomSourceFailure(format!(
            "no usable draw for 0..{count} after {} attempts",
            MAX_REDRAWS + 1
        )))
    }
}

/// Rejected draws [`RandomSource::draw_below`] tolerates before giving up.
pub const MAX_REDRAWS: u32 = 64;

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&mut self) -> Result<u32> {
        (**self).draw()
    }

    fn range(&self) -> RangeInclusive<u32> {
        (**self).range()
    }
}

/// Uniform source over `1..=10`.
///
/// Uses ChaCha8 so a seed fully determines the sequence.
#[derive(Clone, Debug)]
pub struct OneThroughTen {
    inner: ChaCha8Rng,
    seed: u64,
}

impl OneThroughTen {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source with a seed taken from the thread RNG.
    ///
    /// The chosen seed is still available through [`OneThroughTen::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the generator position.
    #[must_use]
    pub fn state(&self) -> SourceState {
        SourceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a source captured with [`OneThroughTen::state`].
    #[must_use]
    pub fn from_state(state: &SourceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for OneThroughTen {
    fn draw(&mut self) -> Result<u32> {
        Ok(self.inner.gen_range(SOURCE_MIN..=SOURCE_MAX))
    }
}

/// Serializable position of a [`OneThroughTen`] source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// Replays a fixed list of values.
///
/// Values are handed out as given, without range checks, so tests can also
/// feed values outside `1..=10`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<u32>,
    position: usize,
    cycle: bool,
}

impl ScriptedSource {
    /// A script that fails after its last value.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            position: 0,
            cycle: false,
        }
    }

    /// A script that starts over after its last value.
    ///
    /// An empty cycling script still fails on every draw.
    #[must_use]
    pub fn cycle(values: Vec<u32>) -> Self {
        Self {
            cycle: true,
            ..Self::new(values)
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self) -> Result<u32> {
        if self.values.is_empty() {
            return Err(KnockOutError::RandomSourceFailure("script is empty".into()));
        }

        let index = if self.cycle {
            self.position % self.values.len()
        } else {
            self.position
        };

        let value = self.values.get(index).copied().ok_or_else(|| {
            KnockOutError::RandomSourceFailure(format!(
                "script exhausted after {} values",
                self.values.len()
            ))
        })?;

        self.position += 1;
        Ok(value)
    }
}
