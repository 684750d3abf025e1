//! Point assignment and scoring.

use crate::card::{Card, Rank, Suit};

use super::Deck;

impl Deck {
    /// Assigns the default point values.
    ///
    /// Each standard rank scores its ordinal (`Ace` = 1 through
    /// `Ten` = 10); face cards score one above it (`Jack` = 12,
    /// `Queen` = 13, `King` = 14). [`Deck::new`] runs this before applying
    /// any options; [`Deck::unscored`] skips it.
    pub fn assign_default_points(&mut self) {
        for card in &mut self.cards {
            card.point = card.rank.default_point();
        }
    }

    /// Sets `point` on every face card (Jack, Queen, King).
    pub fn face_points(&mut self, point: i32) {
        for card in &mut self.cards {
            if card.rank.is_face() {
                card.point = point;
            }
        }
    }

    /// Sets `point` on every card of the given rank.
    pub fn rank_points(&mut self, rank: Rank, point: i32) {
        for card in &mut self.cards {
            if card.rank == rank {
                card.point = point;
            }
        }
    }

    /// Sets `point` on every card of the given suit.
    pub fn suit_points(&mut self, suit: Suit, point: i32) {
        for card in &mut self.cards {
            if card.suit == suit {
                card.point = point;
            }
        }
    }

    /// Sets `point` on the cards matching both `rank` and `suit`.
    ///
    /// A `Joker` rank matches every Joker in the deck regardless of `suit`,
    /// since a Joker's suit carries no meaning.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, Rank, Suit, points};
    ///
    /// let mut deck = Deck::new([]);
    /// deck.add_points(Rank::Queen, Suit::Heart, 75);
    /// assert_eq!(points(deck.cards()), 94 * 4 - 13 + 75);
    /// ```
    pub fn add_points(&mut self, rank: Rank, suit: Suit, point: i32) {
        for card in &mut self.cards {
            if card.rank == rank && (rank == Rank::Joker || card.suit == suit) {
                card.point = point;
            }
        }
    }
}

/// Sums the points of the visible cards in `cards`.
///
/// Face-down cards contribute nothing.
#[must_use]
pub fn points(cards: &[Card]) -> i32 {
    cards
        .iter()
        .filter(|card| card.visible)
        .map(|card| card.point)
        .sum()
}
