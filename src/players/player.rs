//! Player identity, teams, and seats.
//!
//! ## PlayerId
//!
//! Players are numbered 1–4. Identity equality everywhere in the engine is
//! by player number, never by reference.
//!
//! ## Teams
//!
//! Partners sit opposite each other in turn order: players 1 and 2 form one
//! team, players 3 and 4 the other, and the fixed seat cycle 1→3→2→4
//! alternates teams every turn.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EngineResult, IllegalAction};

/// Player identifier, 1-based (1..=4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// ## Panics
    ///
    /// Panics unless `number` is 1..=4.
    #[must_use]
    pub fn new(number: u8) -> Self {
        assert!((1..=4).contains(&number), "player number must be 1..=4");
        Self(number)
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all four player IDs in number order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (1..=4).map(PlayerId)
    }

    /// This player's team.
    #[must_use]
    pub const fn team(self) -> Team {
        match self.0 {
            1 | 2 => Team::One,
            _ => Team::Two,
        }
    }

    /// This player's partner.
    #[must_use]
    pub const fn partner(self) -> PlayerId {
        match self.0 {
            1 => PlayerId(2),
            2 => PlayerId(1),
            3 => PlayerId(4),
            _ => PlayerId(3),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// The two partnerships.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::One => f.write_str("team one"),
            Team::Two => f.write_str("team two"),
        }
    }
}

/// Table position, a presentation hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    South,
    West,
    North,
    East,
}

impl Seat {
    /// The seat conventionally assigned to each player number.
    #[must_use]
    pub const fn for_player(id: PlayerId) -> Seat {
        match id.0 {
            1 => Seat::South,
            2 => Seat::North,
            3 => Seat::West,
            _ => Seat::East,
        }
    }

    /// Seat name, used as the default player name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
            Seat::East => "East",
        }
    }
}

/// A player at the table.
///
/// `hand` holds the cards dealt this hand; `played` accumulates the cards
/// played so far, so the cards still available are `hand` minus `played`
/// (by card identity, not position).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub id: PlayerId,
    pub team: Team,
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub played: Vec<Card>,
    pub is_human: bool,
}

impl Player {
    /// Create a player with the conventional seat and team for its number.
    #[must_use]
    pub fn new(id: PlayerId, is_human: bool) -> Self {
        let seat = Seat::for_player(id);
        Self {
            name: seat.name().to_string(),
            id,
            team: id.team(),
            seat,
            hand: Vec::new(),
            played: Vec::new(),
            is_human,
        }
    }

    /// Cards in hand not yet played this hand.
    #[must_use]
    pub fn available_to_play(&self) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|card| !self.played.contains(card))
            .collect()
    }

    /// Swap `card` out of the hand for the turned trump card, preserving the
    /// discarded card's slot so hand ordering stays stable.
    ///
    /// Discarding the turned card itself is a no-op: the dealer keeps their
    /// hand and the turned card is never absorbed.
    pub fn discard_for(&mut self, card: Card, turned: Card) -> EngineResult<()> {
        if card == turned {
            return Ok(());
        }
        let Some(slot) = self.hand.iter().position(|held| *held == card) else {
            return Err(IllegalAction::CardNotHeld.into());
        };
        self.hand[slot] = turned;
        Ok(())
    }

    /// Reset per-hand state.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.played.clear();
    }
}

// Player identity is the player number.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}
