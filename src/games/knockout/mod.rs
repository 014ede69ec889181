//! Knock Out! dice game.
//!
//! Rules:
//! - Every player gets a knockout number: 6, 7, 8, or 9
//! - Players take turns rolling the die twice and adding both faces to their score
//! - Rolling your own knockout number knocks you out of the game
//! - Play ends when every player is knocked out or one player reaches 100 points

mod game;

pub use game::{KnockOut, Turn, MAX_SIDES, TARGET_SCORE};
