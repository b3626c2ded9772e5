//! Game settings supplied by the caller.
//!
//! The engine reads the difficulty level and the house-rule flags; the speed
//! value is opaque and only echoed back to the presentation layer, which owns
//! all timing.

use serde::{Deserialize, Serialize};

/// Automated-player strength.
///
/// Lower difficulties add noise to bid and discard decisions, making them
/// weaker and less predictable. `TableTalk` plays at expert strength but is
/// additionally allowed to peek at its partner's hand when deciding a
/// borderline bid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Noisy, weak decisions.
    Novice,
    /// Moderately noisy decisions.
    Intermediate,
    /// No noise.
    #[default]
    Expert,
    /// Expert strength plus the partner-peek bid bonus.
    TableTalk,
}

impl Difficulty {
    /// Random jitter added to a composite bid score.
    ///
    /// Skewed negative for the lower tiers so weak bidders under-call more
    /// often than they over-call.
    pub fn bid_jitter(self, rng: &mut crate::core::GameRng) -> i32 {
        match self {
            Difficulty::Novice => rng.gen_range(-200..101),
            Difficulty::Intermediate => rng.gen_range(-100..51),
            Difficulty::Expert | Difficulty::TableTalk => 0,
        }
    }

    /// Random jitter added per candidate when choosing a discard.
    pub fn discard_jitter(self, rng: &mut crate::core::GameRng) -> i32 {
        match self {
            Difficulty::Novice => rng.gen_range(0..51),
            Difficulty::Intermediate => rng.gen_range(0..26),
            Difficulty::Expert | Difficulty::TableTalk => 0,
        }
    }

    /// Minimum composite score before a bidder will go alone.
    #[must_use]
    pub fn loner_threshold(self) -> i32 {
        match self {
            Difficulty::Novice => 950,
            Difficulty::Intermediate => 900,
            Difficulty::Expert | Difficulty::TableTalk => 850,
        }
    }
}

/// Named animation speeds.
///
/// The engine never sleeps; these are consumed by the presentation layer
/// between engine calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSpeed {
    /// No delay between transitions.
    FullSpeed,
    /// Brief delay.
    Fast,
    /// Comfortable delay.
    #[default]
    Normal,
    /// Long delay.
    Slow,
}

impl GameSpeed {
    /// Delay in milliseconds for the caller to await between engine calls.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            GameSpeed::FullSpeed => 0,
            GameSpeed::Fast => 300,
            GameSpeed::Normal => 700,
            GameSpeed::Slow => 1500,
        }
    }
}

/// Caller-supplied configuration for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Automated-player strength.
    pub difficulty: Difficulty,
    /// Force the dealer to name trump if everyone passes the second round.
    pub stick_the_dealer: bool,
    /// Reject plays that fail follow-suit validation instead of recording a
    /// renege.
    pub enforce_follow_suit: bool,
    /// Presentation hint: auto-play for a human when only one card is legal.
    pub auto_follow_suit: bool,
    /// Presentation timing hint; opaque to the engine.
    pub speed: GameSpeed,
}

impl GameSettings {
    /// Create settings with defaults (expert difficulty, no house rules).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Enable the stick-the-dealer house rule.
    #[must_use]
    pub fn with_stick_the_dealer(mut self, enabled: bool) -> Self {
        self.stick_the_dealer = enabled;
        self
    }

    /// Enable follow-suit enforcement.
    #[must_use]
    pub fn with_enforce_follow_suit(mut self, enabled: bool) -> Self {
        self.enforce_follow_suit = enabled;
        self
    }

    /// Enable auto-follow-suit for human players.
    #[must_use]
    pub fn with_auto_follow_suit(mut self, enabled: bool) -> Self {
        self.auto_follow_suit = enabled;
        self
    }

    /// Set the presentation speed.
    #[must_use]
    pub fn with_speed(mut self, speed: GameSpeed) -> Self {
        self.speed = speed;
        self
    }
}
