//! Driver that generates the standard deck and prints both renderings.

use deckrs::{Deck, render};

fn main() {
    let deck = Deck::standard();

    println!("Condensed deck:");
    for row in render::condensed_rows(deck.cards()) {
        println!("{row}");
    }

    println!();
    println!("ASCII art deck:");
    for row in render::art_rows(deck.cards()) {
        println!("{row}");
    }
}
