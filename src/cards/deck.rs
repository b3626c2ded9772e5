//! Deck construction and shuffling.
//!
//! A deck is 24 distinct cards (6 ranks × 4 suits), slot-indexed 0..23.
//! Shuffling is one or more Fisher–Yates passes over the whole deck; slot
//! indexes are reassigned afterwards so they always read 0..23 in deck
//! order. Every shuffle is a bijection: the same 24 (suit, rank) pairs are
//! present before and after, a property callers re-check with
//! [`verify_deck`].

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::{EngineError, EngineResult, GameRng, IntegrityKind};

/// Cards in a euchre deck.
pub const DECK_SIZE: usize = 24;

/// Build the canonical 24-card deck, slot-indexed 0..23.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut index = 0u8;
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank, index));
            index += 1;
        }
    }
    deck
}

/// Shuffle the deck with `passes` Fisher–Yates passes (minimum one), then
/// reassign slot indexes 0..23 in the new order.
pub fn shuffle(deck: &mut [Card], passes: u32, rng: &mut GameRng) {
    for _ in 0..passes.max(1) {
        rng.shuffle(deck);
    }
    for (slot, card) in deck.iter_mut().enumerate() {
        card.index = slot as u8;
    }
}

/// Assert that `cards` is a full deck: 24 cards, one of each (suit, rank).
///
/// Returns an integrity error naming the missing or duplicated card. This is
/// a hard invariant check; a failure means a logic bug upstream.
pub fn verify_deck(cards: &[Card]) -> EngineResult<()> {
    if cards.len() != DECK_SIZE {
        return Err(EngineError::integrity(
            IntegrityKind::CardCount,
            format!("expected {DECK_SIZE} cards, found {}", cards.len()),
        ));
    }

    let mut seen: FxHashSet<(Suit, Rank)> = FxHashSet::default();
    for card in cards {
        if !seen.insert((card.suit, card.rank)) {
            return Err(EngineError::integrity(
                IntegrityKind::DuplicateCard,
                format!("{card} appears more than once"),
            ));
        }
    }

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            if !seen.contains(&(suit, rank)) {
                return Err(EngineError::integrity(
                    IntegrityKind::MissingCard,
                    format!("{} missing from deck", Card::new(suit, rank, 0)),
                ));
            }
        }
    }

    Ok(())
}
