//! # knockout
//!
//! The Knock Out! dice game, built from small capabilities passed in as traits.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every random decision goes through a
//!    `RandomSource`. Seed `OneThroughTen` for reproducible games, or script
//!    exact rolls with `ScriptedSource`.
//!
//! 2. **Decoupled Reporting**: Games notify a weakly held `GameObserver` and
//!    run silently without one.
//!
//! 3. **Resumable Play**: `KnockOut::step` advances one player-turn at a
//!    time; `KnockOut::play` runs to the end.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use knockout::{KnockOut, OneThroughTen, TurnTracker};
//!
//! let tracker = Rc::new(RefCell::new(TurnTracker::new()));
//! let mut game = KnockOut::new(4, OneThroughTen::new(42)).unwrap();
//! game.set_observer(&tracker);
//!
//! let outcome = game.play().unwrap();
//! assert_eq!(tracker.borrow().turns(), game.turns_taken());
//! println!("{outcome:?}");
//! ```
//!
//! ## Modules
//!
//! - `core`: Errors, random sources, dice, players, configuration
//! - `rules`: `DiceGame` trait, game status, outcomes
//! - `observer`: `GameObserver` trait and `TurnTracker`
//! - `games`: Knock Out! itself

pub mod core;
pub mod games;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Die, KnockOutConfig, KnockOutError, OneThroughTen, Player, PlayerId, RandomSource, Result,
    ScriptedSource, SourceState,
};

pub use crate::rules::{DiceGame, GameStatus, Outcome};

pub use crate::observer::{GameObserver, TurnTracker};

pub use crate::games::knockout::{KnockOut, Turn, MAX_SIDES, TARGET_SCORE};
