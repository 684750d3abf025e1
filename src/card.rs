//! Card, rank, and suit types.

use core::fmt;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Suit {
    /// Spades. The zero suit, also carried by Jokers.
    #[default]
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
}

impl Suit {
    /// All four suits, in the order the base deck is built.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit as Self
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
        })
    }
}

/// Card rank. `Joker` is a sentinel outside the `Ace`..=`King` band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Joker. Its suit carries no meaning.
    Joker = 0,
    /// Ace, the lowest standard rank.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King, the highest standard rank.
    King = 13,
}

impl Rank {
    /// Lowest standard rank.
    pub const MIN: Self = Self::Ace;
    /// Highest standard rank.
    pub const MAX: Self = Self::King;

    /// The thirteen standard ranks, `Ace` through `King`.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns whether the rank is a face card (Jack, Queen, or King).
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Default point value: the rank ordinal, one more for face cards
    /// (`Ace` = 1 through `Ten` = 10, `Jack` = 12, `Queen` = 13,
    /// `King` = 14).
    #[must_use]
    pub const fn default_point(self) -> i32 {
        if self.is_face() {
            self as i32 + 1
        } else {
            self as i32
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as Self
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Joker => "Joker",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        })
    }
}

/// A playing card.
///
/// Equality is field-wise: two cards compare equal only when rank, suit,
/// visibility, and point value all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card. Meaningless for Jokers, which keep the zero
    /// suit ([`Suit::Spade`]).
    pub suit: Suit,
    /// Whether the card is face up. Face-down cards display as a fixed
    /// placeholder and score zero.
    pub visible: bool,
    /// Scoring weight, assignable independently of rank and suit.
    pub point: i32,
}

impl Card {
    /// Creates a face-up card with no points assigned.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Queen, Suit::Heart);
    /// assert!(card.visible);
    /// assert_eq!(card.to_string(), "Queen of Hearts");
    /// ```
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: true,
            point: 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.visible {
            return f.write_str("FACEDOWN");
        }
        if self.rank == Rank::Joker {
            return fmt::Display::fmt(&Rank::Joker, f);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;
