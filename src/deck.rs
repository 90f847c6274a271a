//! Standard deck generation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, RANK_MAX, RANK_MIN, Suit};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 13;

/// An ordered standard 52-card deck.
///
/// Cards are ordered by suit (hearts, diamonds, clubs, spades) and by
/// ascending rank within each suit: index `i` holds rank `i % 13 + 1` of
/// suit `Suit::ALL[i / 13]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in generation order.
    cards: Vec<Card>,
}

impl Deck {
    /// Generates the standard deck, one card per (suit, rank) pair.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in RANK_MIN..=RANK_MAX {
                // the loop only produces in-range ranks
                if let Ok(card) = Card::new(rank, suit) {
                    cards.push(card);
                }
            }
        }
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Returns the cards in generation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the four 13-card suit rows in generation order.
    pub fn suit_rows(&self) -> impl Iterator<Item = &[Card]> {
        self.cards.chunks(RANKS_PER_SUIT)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
