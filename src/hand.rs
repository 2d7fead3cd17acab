//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Sum of card values with every Ace counted as 1.
fn min_score(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.value()))
}

/// Best score promoting at most one Ace to 11.
///
/// Above 11 an Ace counted as 11 can only bust the hand, so the hard total is
/// kept. A second Ace is never promoted: two Aces score 12.
fn score(cards: &[Card]) -> u8 {
    let min = min_score(cards);
    if min > 11 {
        return min;
    }

    if cards.iter().any(Card::is_ace) {
        min + 10
    } else {
        min
    }
}

/// Cards held by one participant, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the score with every Ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        min_score(&self.cards)
    }

    /// Returns the blackjack score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether an Ace is being counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand scores over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand holds at least one Ace.
    #[must_use]
    pub fn contains_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Renders the hand with everything but the first card hidden.
    #[must_use]
    pub const fn dealer_view(&self) -> DealerView<'_> {
        DealerView(self)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Display adapter showing the dealer's up card and a hidden hole card.
#[derive(Debug, Clone, Copy)]
pub struct DealerView<'a>(&'a Hand);

impl fmt::Display for DealerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.cards.first() {
            Some(card) => write!(f, "{card}, **HIDDEN**"),
            None => f.write_str("(no cards)"),
        }
    }
}
