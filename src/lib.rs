//! A console blackjack game built on immutable game-state transitions.
//!
//! The crate provides a [`GameState`] value that is advanced through pure
//! transitions ([`GameState::shuffle`], [`GameState::deal`],
//! [`GameState::hit`], [`GameState::stand`], [`GameState::end_game`]). Each
//! transition borrows the current state and returns a new one.
//!
//! # Example
//!
//! ```
//! use bjstate::{Card, Deck, GameState, Phase, Suit};
//!
//! let deck = Deck::from_cards(vec![
//!     Card::new(Suit::Hearts, 10),
//!     Card::new(Suit::Clubs, 9),
//!     Card::new(Suit::Spades, 6),
//!     Card::new(Suit::Diamonds, 8),
//! ]);
//! let state = GameState::with_deck(deck).deal()?;
//! assert_eq!(state.phase(), Phase::PlayerTurn);
//! assert_eq!(state.player().score(), 16);
//! # Ok::<(), bjstate::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SessionError;
pub use error::{ActionError, DealError};
pub use game::{GameState, Phase, dealer_should_hit};
pub use hand::{DealerView, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use session::{Session, SessionSummary};
