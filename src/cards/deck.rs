//! Card values and the fixed 150-card deck.
//!
//! | value | copies |
//! |-------|--------|
//! | -2    | 5      |
//! | -1    | 10     |
//! | 0     | 15     |
//! | 1..=12| 10 each|

use rustc_hash::FxHashMap;

/// A card's face value, in `MIN_CARD..=MAX_CARD`.
pub type CardValue = i32;

/// Lowest card value.
pub const MIN_CARD: CardValue = -2;

/// Highest card value.
pub const MAX_CARD: CardValue = 12;

/// Total number of cards in a deck.
pub const DECK_SIZE: usize = 150;

/// Multiset of card values: value -> number of copies.
pub type Census = FxHashMap<CardValue, usize>;

fn copies(value: CardValue) -> usize {
    match value {
        -2 => 5,
        0 => 15,
        _ => 10,
    }
}

/// A full, unshuffled deck in ascending value order.
#[must_use]
pub fn full_deck() -> Vec<CardValue> {
    (MIN_CARD..=MAX_CARD)
        .flat_map(|value| std::iter::repeat(value).take(copies(value)))
        .collect()
}

/// The multiset a full deck is made of.
#[must_use]
pub fn composition() -> Census {
    (MIN_CARD..=MAX_CARD).map(|v| (v, copies(v))).collect()
}
