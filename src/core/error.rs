//! Engine error types.
//!
//! Errors fall into three categories with very different handling contracts:
//!
//! - [`EngineError::Integrity`]: a deck/deal/scoring invariant was violated.
//!   Always fatal to the current operation; indicates a logic bug, never a
//!   user-input problem. Callers log and abort the hand.
//! - [`EngineError::Illegal`]: a proposed bid/discard/play was rejected.
//!   Recoverable; the caller re-prompts. The engine never mutates state
//!   before this validation passes.
//! - [`EngineError::Precondition`]: a phase-specific function was called
//!   while its guard did not hold (e.g. resolving an empty trick).
//!   Programmer error; fails loudly rather than returning nonsense.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A hard invariant was violated. Not recoverable.
    #[error("integrity violation ({kind}): {detail}")]
    Integrity {
        /// Which invariant failed.
        kind: IntegrityKind,
        /// Human-readable description identifying the offending cards/counts.
        detail: String,
    },

    /// A proposed action was rejected. Recoverable; state is untouched.
    #[error("illegal action: {0}")]
    Illegal(#[from] IllegalAction),

    /// A phase guard did not hold. Programmer error.
    #[error("precondition failed in {context}: {detail}")]
    Precondition {
        /// The operation whose guard failed.
        context: &'static str,
        /// What was expected.
        detail: &'static str,
    },
}

impl EngineError {
    /// Build an integrity error.
    pub fn integrity(kind: IntegrityKind, detail: impl Into<String>) -> Self {
        Self::Integrity {
            kind,
            detail: detail.into(),
        }
    }

    /// Build a precondition error.
    #[must_use]
    pub fn precondition(context: &'static str, detail: &'static str) -> Self {
        Self::Precondition { context, detail }
    }
}

/// The invariant classes checked by the deal and scoring paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityKind {
    /// Total cards in play do not sum to the deck size.
    CardCount,
    /// The same (suit, rank) appears twice.
    DuplicateCard,
    /// An expected (suit, rank) is absent.
    MissingCard,
    /// A player holds other than five cards after a deal.
    HandSize,
    /// The kitty holds other than four cards after a deal.
    KittySize,
    /// An operation that needs a dealer found none.
    MissingDealer,
    /// An operation that needs a maker found none.
    MissingMaker,
}

impl std::fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntegrityKind::CardCount => "card count",
            IntegrityKind::DuplicateCard => "duplicate card",
            IntegrityKind::MissingCard => "missing card",
            IntegrityKind::HandSize => "hand size",
            IntegrityKind::KittySize => "kitty size",
            IntegrityKind::MissingDealer => "missing dealer",
            IntegrityKind::MissingMaker => "missing maker",
        };
        f.write_str(name)
    }
}

/// Rejected player actions. These never corrupt engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// The referenced card is not in the acting player's hand.
    #[error("card not held")]
    CardNotHeld,
    /// The played card fails follow-suit validation.
    #[error("must follow suit")]
    MustFollowSuit,
    /// Second-round bids may not name the turned-down suit.
    #[error("cannot name the turned-down suit")]
    CannotBidTurnedSuit,
    /// Under stick-the-dealer, the dealer may not pass the final round.
    #[error("dealer must bid")]
    DealerMustBid,
    /// The acting player is not the current player.
    #[error("out of turn")]
    OutOfTurn,
}
