//! Observer that counts turns.

use tracing::info;

use super::GameObserver;
use crate::rules::DiceGame;

/// Counts the turns of the game it observes.
///
/// The count resets on every `on_game_start`, so one tracker can follow
/// several games in sequence.
#[derive(Clone, Debug, Default)]
pub struct TurnTracker {
    turns: u32,
    games_completed: u32,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns seen in the current (or last) game.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Games that reached `on_game_end`.
    #[must_use]
    pub fn games_completed(&self) -> u32 {
        self.games_completed
    }
}

impl GameObserver for TurnTracker {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        self.turns = 0;
        info!(
            game = game.name(),
            sides = game.die().sides(),
            players = game.players().len(),
            "started a new game"
        );
    }

    fn on_turn(&mut self, _game: &dyn DiceGame, _roll_sum: u32) {
        self.turns += 1;
    }

    fn on_game_end(&mut self, game: &dyn DiceGame) {
        self.games_completed += 1;
        info!(game = game.name(), turns = self.turns, "game finished");
    }
}
