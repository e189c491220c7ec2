//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card from loose data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank or suit is not one of the standard 13 × 4.
    #[error("invalid card spec")]
    InvalidCardSpec,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed for this round.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur during player actions.
///
/// Every variant is returned before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Double down needs exactly two cards in hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand has already been doubled this round.
    #[error("hand already doubled")]
    AlreadyDoubled,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Error returned when an action token is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action, expected hit, stand or double")]
pub struct ActionParseError;
