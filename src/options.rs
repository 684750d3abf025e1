//! Deck construction options.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;

/// Comparator used by [`DeckOption::Sort`].
pub type CardComparator = Box<dyn Fn(&Card, &Card) -> Ordering>;

/// A composable deck construction step.
///
/// Options are applied strictly in the order given to [`Deck::new`]. Each
/// one observes the deck as built so far, so options do not commute:
/// replicating before removing ranks leaves a different deck than removing
/// before replicating.
pub enum DeckOption {
    /// Uniformly permutes the deck with a fresh generator seeded from OS
    /// entropy.
    Shuffle,
    /// Uniformly permutes the deck with a generator seeded from the given
    /// value. The same seed always yields the same permutation.
    ShuffleSeeded(u64),
    /// Stably reorders the deck by the comparator. [`DeckOption::sort`]
    /// builds one from a plain closure.
    Sort(CardComparator),
    /// Stably reorders by suit (`Spade`, `Diamond`, `Club`, `Heart`), then
    /// by rank within each suit.
    DefaultSort,
    /// Appends the given number of face-up Jokers, each with the zero suit
    /// and no points.
    AddJokers(usize),
    /// Removes every card whose rank is in the list. Retained cards keep
    /// their visibility and point state.
    RemoveRanks(Vec<Rank>),
    /// Grows the deck to `n` decks' worth of cards by appending `n - 1`
    /// fresh scored base decks. Earlier options are not re-applied to the
    /// appended cards.
    Replicate(usize),
    /// An arbitrary mutation of the in-progress deck.
    Custom(Box<dyn FnOnce(&mut Deck)>),
}

impl DeckOption {
    /// Builds a [`DeckOption::Sort`] from a plain comparator closure.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOption};
    ///
    /// let deck = Deck::new([DeckOption::sort(|a, b| {
    ///     (b.suit, b.rank).cmp(&(a.suit, a.rank))
    /// })]);
    /// assert_eq!(deck[0].to_string(), "King of Hearts");
    /// ```
    pub fn sort<F>(compare: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        Self::Sort(Box::new(compare))
    }

    /// Builds a [`DeckOption::Custom`] from a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: FnOnce(&mut Deck) + 'static,
    {
        Self::Custom(Box::new(f))
    }

    /// Applies this option to `deck`.
    ///
    /// [`Deck::new`] folds its options through this. Applying an option to
    /// an already-built deck composes the same way.
    pub fn apply(self, deck: &mut Deck) {
        match self {
            Self::Shuffle => deck.shuffle(&mut ChaCha8Rng::from_os_rng()),
            Self::ShuffleSeeded(seed) => deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
            Self::Sort(compare) => deck.sort_by(|a, b| compare(a, b)),
            Self::DefaultSort => {
                deck.sort_by(|a, b| suit_major_order(a).cmp(&suit_major_order(b)));
            }
            Self::AddJokers(count) => {
                for _ in 0..count {
                    deck.push(Card::new(Rank::Joker, Suit::Spade));
                }
            }
            Self::RemoveRanks(ranks) => deck.retain(|card| !ranks.contains(&card.rank)),
            Self::Replicate(count) => {
                for _ in 1..count {
                    deck.extend(Deck::new([]));
                }
            }
            Self::Custom(f) => f(deck),
        }
    }
}

/// Suit-major ordering key: thirteen slots per suit, ranks within.
fn suit_major_order(card: &Card) -> u8 {
    u8::from(card.suit) * u8::from(Rank::MAX) + u8::from(card.rank)
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shuffle => f.write_str("Shuffle"),
            Self::ShuffleSeeded(seed) => f.debug_tuple("ShuffleSeeded").field(seed).finish(),
            Self::Sort(_) => f.write_str("Sort(..)"),
            Self::DefaultSort => f.write_str("DefaultSort"),
            Self::AddJokers(count) => f.debug_tuple("AddJokers").field(count).finish(),
            Self::RemoveRanks(ranks) => f.debug_tuple("RemoveRanks").field(ranks).finish(),
            Self::Replicate(count) => f.debug_tuple("Replicate").field(count).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
