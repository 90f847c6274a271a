//! Error types for card construction and mutation.

use thiserror::Error;

/// Errors that can occur when constructing or mutating a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside the valid 1..=13 range.
    #[error("invalid card rank: {0}")]
    InvalidRank(u8),
    /// Character that does not name one of the four suits.
    #[error("invalid suit glyph: {0:?}")]
    InvalidSuit(char),
    /// Copy source card is absent.
    #[error("copy source card is absent")]
    NullSource,
}
