//! Deal mechanics.
//!
//! Cards go around the table twice, in rotation order starting after the
//! dealer. A random split `k ∈ {1, 2, 3}` is drawn once per deal: seats
//! alternate between packets of `k` and `5 − k` cards on the first pass and
//! receive the complementary packet on the second, so every player ends with
//! exactly five cards and the last four form the kitty.
//!
//! Dealing is followed by [`verify_deal`], a hard integrity assertion that
//! the 24 dealt cards are exactly the 24 distinct cards of the deck.

use tracing::debug;

use crate::cards::{verify_deck, Card, DECK_SIZE};
use crate::core::{EngineError, EngineResult, IntegrityKind};
use crate::game::GameInstance;
use crate::players::rotation_from;

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 5;

/// Cards left for the kitty.
pub const KITTY_SIZE: usize = 4;

/// Distribute the shuffled deck into four hands and the kitty.
///
/// Consumes the instance's deck. Fails with a dealing-integrity error if the
/// deck was not full or any player would end with other than five cards.
pub fn deal_hand(game: &GameInstance) -> EngineResult<GameInstance> {
    let dealer = game.require_dealer()?;

    if game.deck.len() != DECK_SIZE {
        return Err(EngineError::integrity(
            IntegrityKind::CardCount,
            format!("cannot deal from a deck of {}", game.deck.len()),
        ));
    }

    let mut next = game.clone();
    let split = next.rng.gen_range(1..4) as usize;
    let order = rotation_from(dealer, None);
    let deck = std::mem::take(&mut next.deck);

    let mut cursor = 0;
    for pass in 0..2 {
        for (seat, &id) in order.iter().enumerate() {
            // Alternate packets around the table; complement on the second pass.
            let count = if (seat % 2 == 0) == (pass == 0) {
                split
            } else {
                HAND_SIZE - split
            };
            next.player_mut(id)
                .hand
                .extend_from_slice(&deck[cursor..cursor + count]);
            cursor += count;
        }
    }

    next.kitty = deck[cursor..].to_vec();

    for player in &next.players {
        if player.hand.len() != HAND_SIZE {
            return Err(EngineError::integrity(
                IntegrityKind::HandSize,
                format!("{} dealt {} cards", player.id, player.hand.len()),
            ));
        }
    }
    if next.kitty.len() != KITTY_SIZE {
        return Err(EngineError::integrity(
            IntegrityKind::KittySize,
            format!("kitty dealt {} cards", next.kitty.len()),
        ));
    }

    for id in crate::players::PlayerId::all() {
        next.dealt_hands[id.index()] = next.player(id).hand.clone();
    }

    debug!(%dealer, split, "dealt hand");
    verify_deal(&next)?;
    Ok(next)
}

/// Assert the invariants of a completed deal: five cards per hand, a
/// four-card kitty, and a union that is exactly the 24 distinct cards.
///
/// Failures are integrity errors naming the offending card or count; they
/// indicate a logic bug, not a recoverable condition.
pub fn verify_deal(game: &GameInstance) -> EngineResult<()> {
    for player in &game.players {
        if player.hand.len() != HAND_SIZE {
            return Err(EngineError::integrity(
                IntegrityKind::HandSize,
                format!("{} holds {} cards", player.id, player.hand.len()),
            ));
        }
    }

    if game.kitty.len() != KITTY_SIZE {
        return Err(EngineError::integrity(
            IntegrityKind::KittySize,
            format!("kitty holds {} cards", game.kitty.len()),
        ));
    }

    let mut all: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for player in &game.players {
        all.extend_from_slice(&player.hand);
    }
    all.extend_from_slice(&game.kitty);

    verify_deck(&all)
}
