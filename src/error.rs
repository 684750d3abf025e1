//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
