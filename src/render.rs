//! Row composition for deck renderings.
//!
//! Both renderings process a deck in 13-card chunks, one per suit, and
//! lay the chunk's cards out side by side on shared rows.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::RANKS_PER_SUIT;

/// Builds the condensed rendering, one row per suit.
///
/// Each row holds a 13-card chunk in `A ♥` form, joined by single
/// spaces.
#[must_use]
pub fn condensed_rows(cards: &[Card]) -> Vec<String> {
    cards
        .chunks(RANKS_PER_SUIT)
        .map(|chunk| {
            chunk
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Builds the ASCII-art rendering, [`Card::ART_LINES`] rows per suit.
///
/// Each 13-card chunk contributes five output rows; row `n` joins the
/// n-th art line of every card in the chunk with single spaces, so the
/// chunk's cards appear side by side.
#[must_use]
pub fn art_rows(cards: &[Card]) -> Vec<String> {
    let mut rows = Vec::with_capacity(cards.len().div_ceil(RANKS_PER_SUIT) * Card::ART_LINES);
    for chunk in cards.chunks(RANKS_PER_SUIT) {
        let arts: Vec<String> = chunk.iter().map(Card::art).collect();
        for line in 0..Card::ART_LINES {
            let row = arts
                .iter()
                .map(|art| art.lines().nth(line).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ");
            rows.push(row);
        }
    }
    rows
}
