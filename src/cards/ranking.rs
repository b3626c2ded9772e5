//! Contextual card strength.
//!
//! A card has no intrinsic value: given a trump suit, the trump-suit jack
//! (right bower) is the highest card, the same-color off-suit jack (left
//! bower) counts as trump and ranks second, the remaining trump cards follow
//! a fixed trump table, and off-suit cards follow a separate off-suit table.
//! The two tables are disjoint so no trump card ever ties an off-suit card.
//!
//! Strength is recomputed per bid/trick from these pure functions, never
//! cached on a card.

use super::card::{Card, Rank, Suit};

/// Strength of the left bower: above every other trump, below the right.
const LEFT_BOWER_VALUE: i32 = 250;

/// Off-suit strength table (also used when no trump is fixed).
const fn off_suit_value(rank: Rank) -> i32 {
    match rank {
        Rank::Nine => 10,
        Rank::Ten => 15,
        Rank::Jack => 20,
        Rank::Queen => 25,
        Rank::King => 30,
        Rank::Ace => 50,
    }
}

/// Trump strength table. The jack entry is the right bower and is the single
/// highest value in either table.
const fn trump_value(rank: Rank) -> i32 {
    match rank {
        Rank::Nine => 100,
        Rank::Ten => 110,
        Rank::Queen => 120,
        Rank::King => 130,
        Rank::Ace => 150,
        Rank::Jack => 300,
    }
}

/// True iff `card` is the trump-suit jack.
#[must_use]
pub fn is_right_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump
}

/// True iff `card` is the same-color off-suit jack, which counts as trump.
#[must_use]
pub fn is_left_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump.same_color_partner()
}

/// The suit a card plays as: the left bower belongs to the trump suit, not
/// its printed suit.
#[must_use]
pub fn effective_suit(card: Card, trump: Option<Suit>) -> Suit {
    match trump {
        Some(t) if is_left_bower(card, t) => t,
        _ => card.suit,
    }
}

/// Numeric strength of a card in a trump context.
///
/// With no trump fixed, the flat off-suit table applies to every card.
#[must_use]
pub fn card_value(card: Card, trump: Option<Suit>) -> i32 {
    let Some(trump) = trump else {
        return off_suit_value(card.rank);
    };

    if card.suit == trump {
        trump_value(card.rank)
    } else if is_left_bower(card, trump) {
        LEFT_BOWER_VALUE
    } else {
        off_suit_value(card.rank)
    }
}

/// Group cards by effective suit, in order of first occurrence.
///
/// The left bower counts under the trump suit. Callers must not assume any
/// particular suit ordering.
#[must_use]
pub fn suit_counts(cards: &[Card], trump: Option<Suit>) -> Vec<(Suit, u8)> {
    let mut counts: Vec<(Suit, u8)> = Vec::with_capacity(4);
    for &card in cards {
        let suit = effective_suit(card, trump);
        match counts.iter_mut().find(|(s, _)| *s == suit) {
            Some((_, n)) => *n += 1,
            None => counts.push((suit, 1)),
        }
    }
    counts
}
