use tracing::{debug, info};

use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

use super::{GameState, Phase};

/// Returns whether the dealer draws another card.
///
/// The dealer hits on 16 or less. On a soft 17 (17 only by counting an Ace as
/// 11) the dealer hits unless `stand_on_soft_17` is set.
#[must_use]
pub fn dealer_should_hit(hand: &Hand, options: &GameOptions) -> bool {
    let score = hand.score();
    if score <= 16 {
        return true;
    }

    score == 17 && hand.min_score() != 17 && !options.stand_on_soft_17
}

impl GameState {
    /// Dealer plays their hand according to the rules.
    ///
    /// Applies [`dealer_should_hit`] until the dealer stands or busts and
    /// returns the state at [`Phase::HandOver`]. The dealer plays even when
    /// the player has bust.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotDealerTurn`] outside the dealer's turn, or
    /// [`ActionError::NoCards`] if the deck runs out while the dealer must
    /// draw.
    pub fn dealer_play(&self, options: &GameOptions) -> Result<Self, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::NotDealerTurn);
        }

        let mut state = self.clone();
        while state.phase == Phase::DealerTurn {
            state = if dealer_should_hit(&state.dealer, options) {
                state.hit()?
            } else {
                state.stand()?
            };
        }

        debug!(dealer = %state.dealer, score = state.dealer.score(), "dealer done");
        Ok(state)
    }

    /// Scores both hands, decides the round and clears the hands.
    ///
    /// The deck and phase are left untouched, so the next round continues
    /// from the remaining deck.
    #[must_use]
    pub fn end_game(&self) -> (Self, RoundResult) {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let outcome = Outcome::resolve(player_score, dealer_score);

        info!(player_score, dealer_score, ?outcome, "round over");

        let result = RoundResult {
            player: self.player.clone(),
            dealer: self.dealer.clone(),
            player_score,
            dealer_score,
            outcome,
        };

        let mut next = self.clone();
        next.player.clear();
        next.dealer.clear();
        (next, result)
    }
}
