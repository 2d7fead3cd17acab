//! Game state and transitions.
//!
//! A [`GameState`] is a plain value. Every transition borrows the current
//! state and returns a new one, so callers thread the state by rebinding:
//!
//! ```
//! use bjstate::{GameOptions, GameState};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let options = GameOptions::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let state = GameState::new().shuffle(options.decks, &mut rng);
//! let state = state.deal()?;
//! let state = state.stand()?;
//! let state = state.dealer_play(&options)?;
//! let (state, result) = state.end_game();
//! assert!(state.player().is_empty());
//! assert_eq!(result.player.len(), 2);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

use rand::Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::dealer_should_hit;
pub use state::Phase;

/// Snapshot of a game: remaining deck, phase and both hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    deck: Deck,
    phase: Phase,
    player: Hand,
    dealer: Hand,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates an empty state with no deck and no hand in play.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: Deck::new(),
            phase: Phase::HandOver,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Creates a state holding the given deck and no hand in play.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            phase: Phase::HandOver,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Replaces the deck with `decks` freshly shuffled standard decks.
    ///
    /// Phase and hands are carried over unchanged. Cards already in the hands
    /// are not removed from the new deck, so a shuffle mid-round can leave
    /// more copies of a card in play than `decks` standard decks hold.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(&self, decks: u8, rng: &mut R) -> Self {
        let mut next = self.clone();
        next.deck = Deck::shuffled(decks, rng);
        debug!(cards = next.deck.len(), "shuffled a fresh deck");
        next
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the hand whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCurrentHand`] once the hand is over.
    pub const fn current_hand(&self) -> Result<&Hand, ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(&self.player),
            Phase::DealerTurn => Ok(&self.dealer),
            Phase::HandOver => Err(ActionError::NoCurrentHand),
        }
    }

    fn current_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(&mut self.player),
            Phase::DealerTurn => Ok(&mut self.dealer),
            Phase::HandOver => Err(ActionError::NoCurrentHand),
        }
    }

    /// Moves to the next phase in place. Only called on a fresh copy.
    fn advance(&mut self) -> Result<(), ActionError> {
        self.phase = self.phase.next().ok_or(ActionError::NoCurrentHand)?;
        Ok(())
    }
}
