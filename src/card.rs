//! Card value types and their renderings.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Lowest valid card rank (Ace).
pub const RANK_MIN: u8 = 1;

/// Highest valid card rank (King).
pub const RANK_MAX: u8 = 13;

const fn rank_valid(rank: u8) -> bool {
    RANK_MIN <= rank && rank <= RANK_MAX
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck-generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the unicode glyph for this suit.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Parses a suit from its unicode glyph.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the character is not one of
    /// `♥`, `♦`, `♣`, `♠`.
    pub const fn from_glyph(glyph: char) -> Result<Self, CardError> {
        match glyph {
            '♥' => Ok(Self::Hearts),
            '♦' => Ok(Self::Diamonds),
            '♣' => Ok(Self::Clubs),
            '♠' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(glyph)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card.
///
/// A card always holds a rank in `RANK_MIN..=RANK_MAX`; construction and
/// mutation reject anything outside that range, so no card can be
/// observed in an invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    rank: u8,
    /// The suit of the card.
    suit: Suit,
}

impl Card {
    /// Number of lines in the ASCII-art rendering.
    pub const ART_LINES: usize = 5;

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside 1..=13.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let card = Card::new(1, Suit::Hearts)?;
    /// assert_eq!(card.to_string(), "A ♥");
    /// # Ok::<(), deckrs::CardError>(())
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank_valid(rank) {
            Ok(Self { rank, suit })
        } else {
            Err(CardError::InvalidRank(rank))
        }
    }

    /// Duplicates `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NullSource`] if `source` is absent.
    pub const fn copy_of(source: Option<&Self>) -> Result<Self, CardError> {
        match source {
            Some(card) => Ok(*card),
            None => Err(CardError::NullSource),
        }
    }

    /// Returns the rank (1..=13).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Sets the rank if it is valid, leaving the card unchanged otherwise.
    ///
    /// Returns whether the new rank was applied.
    pub const fn set_rank(&mut self, rank: u8) -> bool {
        if rank_valid(rank) {
            self.rank = rank;
            true
        } else {
            false
        }
    }

    /// Sets the suit.
    ///
    /// Every [`Suit`] value is valid, so this cannot fail; parsing an
    /// untrusted suit character goes through [`Suit::from_glyph`].
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Sets rank and suit together if the rank is valid.
    ///
    /// On an invalid rank neither field changes. Returns whether the new
    /// values were applied.
    pub const fn set_all(&mut self, rank: u8, suit: Suit) -> bool {
        if rank_valid(rank) {
            self.rank = rank;
            self.suit = suit;
            true
        } else {
            false
        }
    }

    /// Returns the rank as printed on the card (A, 2-10, J, Q, K).
    #[must_use]
    pub const fn display_rank(&self) -> &'static str {
        match self.rank {
            1 => "A",
            11 => "J",
            12 => "Q",
            13 => "K",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            // unreachable: rank is validated on every write
            _ => "?",
        }
    }

    /// Renders the card as a five-line ASCII-art box.
    ///
    /// Lines are separated by `\n` with no trailing newline. The value
    /// line gets one extra leading space for one-character ranks so the
    /// box stays seven columns wide:
    ///
    /// ```text
    /// -------
    /// |♥   ♥|
    /// |  A  |
    /// |♥   ♥|
    /// -------
    /// ```
    #[must_use]
    pub fn art(&self) -> String {
        let glyph = self.suit.glyph();
        let rank = self.display_rank();
        let pad = if rank.len() == 1 { "  " } else { " " };
        format!("-------\n|{glyph}   {glyph}|\n|{pad}{rank}  |\n|{glyph}   {glyph}|\n-------")
    }
}

impl Default for Card {
    /// The Ace of Hearts.
    fn default() -> Self {
        Self {
            rank: RANK_MIN,
            suit: Suit::Hearts,
        }
    }
}

impl fmt::Display for Card {
    /// Condensed form: display rank and suit glyph, e.g. `A ♥` or `10 ♠`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_rank(), self.suit.glyph())
    }
}
