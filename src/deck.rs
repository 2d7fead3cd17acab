//! Deck construction and drawing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, KING, Suit};

/// An ordered sequence of remaining cards, drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck whose cards are drawn in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Combines `decks` standard 52-card decks in suit then rank order.
    #[must_use]
    pub fn standard(decks: u8) -> Self {
        Self::from_cards(Self::build(decks))
    }

    /// Combines `decks` standard 52-card decks in uniformly random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Self::build(decks);
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    fn build(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=KING {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the card that the next draw would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
