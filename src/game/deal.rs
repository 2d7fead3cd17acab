use tracing::debug;

use crate::error::DealError;
use crate::hand::Hand;

use super::{GameState, Phase};

/// Cards drawn by [`GameState::deal`].
const INITIAL_CARDS: usize = 4;

impl GameState {
    /// Starts a round: clears both hands and deals two cards to each.
    ///
    /// Cards alternate player, dealer, player, dealer from the front of the
    /// deck. The phase is reset to [`Phase::PlayerTurn`] whatever it was.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    pub fn deal(&self) -> Result<Self, DealError> {
        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut next = self.clone();
        next.player = Hand::new();
        next.dealer = Hand::new();

        for _ in 0..2 {
            let card = next.deck.draw().ok_or(DealError::NotEnoughCards)?;
            next.player.add_card(card);
            let card = next.deck.draw().ok_or(DealError::NotEnoughCards)?;
            next.dealer.add_card(card);
        }
        next.phase = Phase::PlayerTurn;

        debug!(
            player = %next.player,
            dealer_up = %next.dealer.dealer_view(),
            remaining = next.deck.len(),
            "dealt a new round"
        );
        Ok(next)
    }
}
