//! The trick value type.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::players::PlayerId;

/// One card played into a trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player: PlayerId,
    pub card: Card,
}

/// A single trick.
///
/// A trick is open while `taker` is `None`. The `sitting_out` entry exists
/// only on loner hands: it records a synthetic play for the partner who sat
/// out, purely for display and card accounting, and never participates in
/// winner resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// Which of the hand's five tricks this is, 0-based.
    pub round: u8,
    /// Cards played, in play order. At most 4.
    pub plays: SmallVec<[TrickPlay; 4]>,
    /// The winner, once resolved.
    pub taker: Option<PlayerId>,
    /// Synthetic bookkeeping entry for a sitting-out loner partner.
    pub sitting_out: Option<TrickPlay>,
    /// Set when a player failed to follow suit; ends the hand.
    pub renege: Option<PlayerId>,
}

impl Trick {
    /// Create an empty trick for the given round.
    #[must_use]
    pub fn new(round: u8) -> Self {
        Self {
            round,
            plays: SmallVec::new(),
            taker: None,
            sitting_out: None,
            renege: None,
        }
    }

    /// The lead play, if any card has been played.
    #[must_use]
    pub fn lead(&self) -> Option<&TrickPlay> {
        self.plays.first()
    }

    /// True while no winner has been resolved.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.taker.is_none()
    }

    /// The play made by `player`, if any.
    #[must_use]
    pub fn play_by(&self, player: PlayerId) -> Option<&TrickPlay> {
        self.plays.iter().find(|play| play.player == player)
    }
}
