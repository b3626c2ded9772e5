//! Card vocabulary: suits, ranks, colors, and the trump indicator.
//!
//! A euchre deck runs nine through ace in all four suits. Card identity is
//! the (suit, rank) pair; the `index` field is only a stable slot id for
//! tracking a card through the 24-card deck array and is excluded from
//! equality and hashing.

use serde::{Deserialize, Serialize};

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits, in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// The color of this suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Suit::Spades | Suit::Clubs => SuitColor::Black,
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
        }
    }

    /// The other suit of the same color (the left-bower suit when `self` is
    /// trump).
    #[must_use]
    pub const fn same_color_partner(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        };
        write!(f, "{symbol}")
    }
}

/// Suit colors. Spades/clubs pair as black, hearts/diamonds as red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitColor {
    Black,
    Red,
}

/// The six ranks in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(token)
    }
}

/// A playing card.
///
/// `index` is the card's current slot in the 24-card deck array; it is
/// reassigned on every shuffle and must stay unique within a deck, but it is
/// not part of the card's identity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Stable deck-slot id, 0..23. Bookkeeping only.
    pub index: u8,
}

impl Card {
    /// Create a card in a specific deck slot.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, index: u8) -> Self {
        Self { suit, rank, index }
    }
}

// Identity is (suit, rank); the slot index is bookkeeping.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// How trump was fixed for the hand: by picking up the turned card, or by
/// naming a suit in the second bidding round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trump {
    /// The physically turned card was ordered up.
    Turned(Card),
    /// A suit was named with no card pickup.
    Named(Suit),
}

impl Trump {
    /// The trump suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self {
            Trump::Turned(card) => card.suit,
            Trump::Named(suit) => suit,
        }
    }

    /// The turned card, if trump came from a pickup.
    #[must_use]
    pub const fn turned_card(self) -> Option<Card> {
        match self {
            Trump::Turned(card) => Some(card),
            Trump::Named(_) => None,
        }
    }
}

impl std::fmt::Display for Trump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trump::Turned(card) => write!(f, "{card} (turned)"),
            Trump::Named(suit) => write!(f, "{suit} (named)"),
        }
    }
}
