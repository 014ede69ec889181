//! Core building blocks: errors, random sources, dice, players, configuration.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use config::KnockOutConfig;
pub use die::{Die, STANDARD_SIDES};
pub use error::{KnockOutError, Result};
pub use player::{Player, PlayerId, KNOCKOUT_NUMBERS};
pub use rng::{
    OneThroughTen, RandomSource, ScriptedSource, SourceState, MAX_REDRAWS, SOURCE_MAX, SOURCE_MIN,
};
