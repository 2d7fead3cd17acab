//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards remain in the deck.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is over, so no hand can act.
    #[error("it is currently not any player's turn")]
    NoCurrentHand,
    /// The dealer was asked to play outside the dealer's turn.
    #[error("it is not the dealer's turn")]
    NotDealerTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that end a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended before the session finished.
    #[error("input closed before the session finished")]
    InputClosed,
    /// A round could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player or dealer action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}
