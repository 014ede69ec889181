//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while building or playing a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KnockOutError {
    /// Construction arguments were rejected (zero players, zero sides, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The random source could not produce a value.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// A previous random source failure left this game unusable.
    #[error("game was aborted by an earlier random source failure")]
    Aborted,

    /// The game already reached a final outcome.
    #[error("game is already over")]
    GameOver,
}

impl KnockOutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnockOutError>;
