//! A standard 52-card deck model with condensed and ASCII-art rendering,
//! with optional `no_std` support.
//!
//! The crate provides a validated [`Card`] value type, the ordered
//! [`Deck`] generator, and row composition in [`render`] that lays the
//! 13 cards of each suit out side by side.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, render};
//!
//! let deck = Deck::standard();
//! for row in render::condensed_rows(deck.cards()) {
//!     println!("{row}");
//! }
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
pub mod render;

// Re-export main types
pub use card::{Card, RANK_MAX, RANK_MIN, Suit};
pub use deck::{DECK_SIZE, Deck, RANKS_PER_SUIT};
pub use error::CardError;
