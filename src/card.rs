//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Scoring value with the Ace counted as 1 and face cards as 10.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            JACK..=KING => 10,
            _ => 0,
        }
    }

    const fn rank_name(&self) -> Option<&'static str> {
        match self.rank {
            ACE => Some("Ace"),
            2 => Some("Two"),
            3 => Some("Three"),
            4 => Some("Four"),
            5 => Some("Five"),
            6 => Some("Six"),
            7 => Some("Seven"),
            8 => Some("Eight"),
            9 => Some("Nine"),
            10 => Some("Ten"),
            JACK => Some("Jack"),
            QUEEN => Some("Queen"),
            KING => Some("King"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank_name() {
            Some(rank) => write!(f, "{rank} of {}", self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
