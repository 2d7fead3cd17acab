use tracing::debug;

use crate::error::ActionError;

use super::GameState;

impl GameState {
    /// Draws a card into the current hand.
    ///
    /// If the hand busts, its turn ends and the phase advances one step.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCurrentHand`] once the hand is over, or
    /// [`ActionError::NoCards`] if the deck is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.current_hand()?;

        let mut next = self.clone();
        let card = next.deck.draw().ok_or(ActionError::NoCards)?;
        let phase = next.phase;
        let hand = next.current_hand_mut()?;
        hand.add_card(card);

        let score = hand.score();
        let bust = hand.is_bust();
        debug!(?phase, %card, score, "hit");

        if bust {
            next.advance()?;
            debug!(?phase, score, "bust ends the turn");
        }
        Ok(next)
    }

    /// Ends the current hand's turn, advancing the phase one step.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCurrentHand`] once the hand is over.
    pub fn stand(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.advance()?;
        debug!(from = ?self.phase, to = ?next.phase, "stand");
        Ok(next)
    }
}
