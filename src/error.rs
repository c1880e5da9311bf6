//! Error types for deck supply and game operations.

use thiserror::Error;

/// Errors reported by a card supply service.
///
/// Any of these means the whole acquisition failed; cards drawn by earlier
/// steps of the same acquisition are not handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// The service answered with a non-success HTTP status.
    #[error("deck service returned status {status} during {operation}")]
    Status {
        /// The operation that failed.
        operation: &'static str,
        /// The HTTP status code.
        status: u16,
    },
    /// The service reported the operation as unsuccessful.
    #[error("deck service reported failure during {operation}")]
    Unsuccessful {
        /// The operation that failed.
        operation: &'static str,
    },
    /// The service handed out a different number of cards than requested.
    #[error("requested {requested} cards but received {received}")]
    ShortDraw {
        /// Cards requested.
        requested: usize,
        /// Cards received.
        received: usize,
    },
    /// The request never completed.
    #[error("deck service transport error: {0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[error("deck service response could not be decoded: {0}")]
    Decode(String),
}

/// Errors that can occur during game actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An existing-deck operation was attempted without a deck id.
    #[error("deck id is required")]
    DeckUninitialized,
    /// The action is not valid in the current phase.
    #[error("invalid game phase for this action")]
    InvalidPhase,
    /// The card supply service failed.
    #[error(transparent)]
    Supply(#[from] SupplyError),
    /// The session actor is no longer running.
    #[error("game session has shut down")]
    SessionClosed,
}

/// Errors that can occur while loading options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// The variable name.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}
