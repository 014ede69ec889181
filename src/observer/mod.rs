//! Game lifecycle notifications.
//!
//! A game holds its observer weakly and calls it synchronously:
//!
//! 1. `on_game_start` once, before any turn
//! 2. `on_turn` once per player-turn, including the turn that ends the game
//! 3. `on_game_end` once, after the last turn
//!
//! Observers only ever see `&dyn DiceGame`, so they can inspect the game but
//! never drive it.

mod tracker;

pub use tracker::TurnTracker;

use crate::rules::DiceGame;

/// Receives lifecycle notifications from a [`DiceGame`].
///
/// Every hook has an empty default, so an observer only implements what it
/// cares about.
pub trait GameObserver {
    /// The game is about to play its first turn.
    fn on_game_start(&mut self, _game: &dyn DiceGame) {}

    /// A player rolled `roll_sum` with both dice.
    fn on_turn(&mut self, _game: &dyn DiceGame, _roll_sum: u32) {}

    /// The game reached its outcome.
    fn on_game_end(&mut self, _game: &dyn DiceGame) {}
}
