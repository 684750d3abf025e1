//! A playing-card deck construction library with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type built through an ordered sequence of
//! [`DeckOption`] steps: shuffle, sort, add Jokers, remove ranks, and
//! replicate, with per-card point assignment and visibility-aware scoring
//! on top.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOption, Rank, points};
//!
//! let mut deck = Deck::new([
//!     DeckOption::RemoveRanks(vec![Rank::Two]),
//!     DeckOption::ShuffleSeeded(7),
//! ]);
//! assert_eq!(deck.len(), 48);
//!
//! let hand = deck.draw(5)?;
//! assert_eq!(hand.len(), 5);
//! let _ = points(&hand);
//! # Ok::<(), deckrs::DrawError>(())
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
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, points};
pub use error::DrawError;
pub use options::{CardComparator, DeckOption};
