//! Game abstraction shared by games and observers.
//!
//! Games implement `DiceGame` so observers can inspect them without knowing
//! the concrete type. A finished game reports an `Outcome`.

pub mod engine;

pub use engine::{DiceGame, GameStatus, Outcome};
