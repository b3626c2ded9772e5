//! The ordered phases of a hand.

use serde::{Deserialize, Serialize};

/// Bidding rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidRound {
    /// Only the turned card's suit may be ordered.
    First,
    /// Any suit except the turned-down one may be named.
    Second,
}

/// Game-flow phase.
///
/// Phases run `DealForDealer → ShuffleAndDeal → Bidding → OrderTrump →
/// (Discard?) → PlayTricks → HandScored → (GameOver | ShuffleAndDeal)`, with
/// the deal passing to the next dealer when both bidding rounds go around
/// with no call. Every flow function guards on the current phase and fails
/// with a precondition error when driven out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Drawing cards to decide the first dealer.
    DealForDealer,
    /// A fresh shuffle and deal is due.
    ShuffleAndDeal,
    /// Players are bidding for trump.
    Bidding(BidRound),
    /// Trump was ordered up and the dealer owes a discard.
    Discard,
    /// Tricks are being played.
    PlayTricks,
    /// The hand is over and scored; the next deal is due.
    HandScored,
    /// A team has reached the winning score.
    GameOver,
}

impl GamePhase {
    /// True during either bidding round.
    #[must_use]
    pub const fn is_bidding(self) -> bool {
        matches!(self, GamePhase::Bidding(_))
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::DealForDealer => "deal for dealer",
            GamePhase::ShuffleAndDeal => "shuffle and deal",
            GamePhase::Bidding(BidRound::First) => "bidding (first round)",
            GamePhase::Bidding(BidRound::Second) => "bidding (second round)",
            GamePhase::Discard => "discard",
            GamePhase::PlayTricks => "play",
            GamePhase::HandScored => "hand scored",
            GamePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}
