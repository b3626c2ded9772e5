//! The immutable end-of-hand snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::trick::Trick;
use crate::cards::{Card, Trump};
use crate::players::{PlayerId, Team};

/// How a hand ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// The makers took all five tricks.
    Swept,
    /// The makers took three or four tricks.
    Made,
    /// The makers took fewer than three tricks; defenders score.
    Euchred,
    /// The named player failed to follow suit; the hand ended early.
    Renege(PlayerId),
}

/// Snapshot of a completed hand.
///
/// Created exactly once, when the hand ends, and never mutated. Carries
/// everything needed both to score the hand and to replay it: the replay
/// path rebuilds identical starting hands, kitty, and turned card from this
/// snapshot alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// Who dealt the hand.
    pub dealer: PlayerId,
    /// Who named trump.
    pub maker: PlayerId,
    /// The team awarded points.
    pub winning_team: Team,
    /// Points awarded to `winning_team`.
    pub points: u32,
    /// Whether the maker played alone.
    pub loner: bool,
    /// How trump was fixed.
    pub trump: Trump,
    /// The dealer's discard, when the turned card was picked up.
    pub discard: Option<Card>,
    /// The four undealt cards, turned card first.
    pub kitty: Vec<Card>,
    /// Each player's hand exactly as dealt, indexed by player.
    pub dealt_hands: [Vec<Card>; 4],
    /// The tricks of the hand, in play order.
    pub tricks: Vector<Trick>,
    /// How the hand ended.
    pub outcome: HandOutcome,
}

impl HandResult {
    /// Serialize to bytes for the persistence shim.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore from bytes produced by [`HandResult::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn sample() -> HandResult {
        HandResult {
            dealer: PlayerId::new(1),
            maker: PlayerId::new(3),
            winning_team: Team::Two,
            points: 2,
            loner: false,
            trump: Trump::Named(Suit::Hearts),
            discard: None,
            kitty: vec![Card::new(Suit::Spades, Rank::Nine, 20)],
            dealt_hands: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            tricks: Vector::new(),
            outcome: HandOutcome::Euchred,
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        let result = sample();
        let bytes = result.to_bytes().unwrap();
        let restored = HandResult::from_bytes(&bytes).unwrap();
        assert_eq!(result, restored);
    }

    #[test]
    fn test_json_roundtrip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let restored: HandResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, restored);
    }
}
