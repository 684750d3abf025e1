//! Deck construction and draw operations.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::Index;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::options::DeckOption;

mod score;

pub use score::points;

/// An ordered deck of playing cards.
///
/// Insertion order is significant: it defines both draw order and display
/// order, and decks may hold duplicates (replicated decks, added Jokers).
/// A deck is an exclusively owned value with no interior locking; callers
/// sharing one across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a scored standard deck and applies `options` in order.
    ///
    /// The base deck holds the 52 standard cards face up, suits in
    /// `Spade, Diamond, Club, Heart` order with ranks `Ace` through `King`
    /// inside each suit, scored via [`Deck::assign_default_points`]. Each
    /// option then observes and mutates the deck built so far.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOption};
    ///
    /// let deck = Deck::new([DeckOption::AddJokers(2), DeckOption::ShuffleSeeded(42)]);
    /// assert_eq!(deck.len(), 54);
    /// ```
    #[must_use]
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut deck = Self::base();
        deck.assign_default_points();
        deck.apply_all(options);
        deck
    }

    /// Builds a standard deck like [`Deck::new`] but leaves every card at
    /// zero points.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::unscored([]);
    /// assert!(deck.iter().all(|card| card.point == 0));
    /// ```
    #[must_use]
    pub fn unscored<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut deck = Self::base();
        deck.apply_all(options);
        deck
    }

    /// The 52 standard cards in canonical order, face up, unscored.
    fn base() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    fn apply_all<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = DeckOption>,
    {
        for option in options {
            option.apply(self);
        }
    }

    /// Removes and returns the first `n` cards, in order.
    ///
    /// The deck keeps the remaining suffix.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] when `n` exceeds the deck
    /// size; the deck is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut deck = Deck::new([]);
    /// let hand = deck.draw(5)?;
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// # Ok::<(), deckrs::DrawError>(())
    /// ```
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        if n > self.cards.len() {
            return Err(DrawError::NotEnoughCards);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards in draw order, mutably.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Iterates over the cards in draw order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Appends a card to the back of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Keeps only the cards for which `keep` returns `true`, preserving
    /// order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Card) -> bool,
    {
        self.cards.retain(keep);
    }

    /// Stably sorts the deck by `compare`.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.cards.sort_by(compare);
    }

    /// Uniformly permutes the deck with the provided generator.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.shuffle(rng);
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
