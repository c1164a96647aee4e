//! Cards: values, deck composition, and the shared draw/discard supply.

pub mod deck;
pub mod supply;

pub use deck::{composition, full_deck, CardValue, Census, DECK_SIZE, MAX_CARD, MIN_CARD};
pub use supply::CardSupply;
