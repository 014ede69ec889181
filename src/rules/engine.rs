//! The dice game abstraction observers see.

use serde::{Deserialize, Serialize};

use crate::core::die::Die;
use crate::core::player::{Player, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player reached the target score.
    Winner {
        player: PlayerId,
        score: u32,
    },
    /// Nobody is left in the game.
    AllKnockedOut,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner { player: p, .. } if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::AllKnockedOut => None,
        }
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Finished(Outcome),
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// A game played with a single die.
///
/// Object safe, so observers receive `&dyn DiceGame` and stay decoupled from
/// the concrete game type.
pub trait DiceGame {
    /// Human readable name of the game.
    fn name(&self) -> &str;

    /// The die the game rolls.
    fn die(&self) -> &Die;

    /// The roster, in turn order.
    fn players(&self) -> &[Player];

    /// Where the game is in its lifecycle.
    fn status(&self) -> GameStatus;

    /// Players still in the game.
    fn active_players(&self) -> usize {
        self.players().iter().filter(|p| p.is_active()).count()
    }
}
