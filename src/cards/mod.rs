//! Card model: vocabulary, contextual ranking, and the deck.

pub mod card;
pub mod deck;
pub mod ranking;

pub use card::{Card, Rank, Suit, SuitColor, Trump};
pub use deck::{build_deck, shuffle, verify_deck, DECK_SIZE};
pub use ranking::{
    card_value, effective_suit, is_left_bower, is_right_bower, suit_counts,
};
