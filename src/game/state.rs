//! Round phase types.

/// Stage of a round.
///
/// Phases only move forward within a round; [`GameState::deal`] resets the
/// phase to [`Phase::PlayerTurn`].
///
/// [`GameState::deal`]: super::GameState::deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    HandOver,
}

impl Phase {
    /// Returns the following phase, or `None` once the hand is over.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PlayerTurn => Some(Self::DealerTurn),
            Self::DealerTurn => Some(Self::HandOver),
            Self::HandOver => None,
        }
    }
}
