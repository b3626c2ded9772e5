//! The game aggregate.
//!
//! A `GameInstance` is created once per game and carries everything the
//! engine needs: the four players, the deal in progress, the bid outcome,
//! the tricks of the current hand, accumulated hand results, and the
//! deterministic RNG. Flow functions never mutate a caller's instance in
//! place; they clone (cheap, thanks to persistent collections for the large
//! lists), mutate the clone, and return it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::result::HandResult;
use super::trick::Trick;
use crate::cards::{Card, Trump};
use crate::core::{EngineError, EngineResult, GameRng, GameSettings, IntegrityKind};
use crate::flow::phase::GamePhase;
use crate::players::{Player, PlayerId, Team};

/// Points needed to win the game.
pub const WINNING_SCORE: u32 = 10;

/// Full state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameInstance {
    /// Caller-supplied configuration.
    pub settings: GameSettings,
    /// The four players, indexed by `PlayerId::index`.
    pub players: [Player; 4],
    /// Current flow phase.
    pub phase: GamePhase,
    /// Undealt deck (empty once a deal completes).
    pub deck: Vec<Card>,
    /// The four undealt cards, turned card first.
    pub kitty: Vec<Card>,
    /// Each hand exactly as dealt, kept for replay and card accounting.
    pub dealt_hands: [Vec<Card>; 4],
    /// The dealer's discard, when the turned card was picked up.
    pub discard: Option<Card>,
    /// The current dealer.
    pub dealer: Option<PlayerId>,
    /// Whose turn it is (to bid or to play).
    pub current_player: Option<PlayerId>,
    /// Trump for the current hand, once fixed.
    pub trump: Option<Trump>,
    /// Who named trump.
    pub maker: Option<PlayerId>,
    /// Whether the maker is playing alone.
    pub loner: bool,
    /// How many deals have passed out with no trump named.
    pub deal_passes: u32,
    /// Passes so far in the current bidding round.
    pub bid_passes: u8,
    /// The open trick, if one is underway.
    pub current_trick: Option<Trick>,
    /// Completed tricks of the current hand.
    pub tricks: Vector<Trick>,
    /// Results of completed hands, oldest first.
    pub results: Vector<HandResult>,
    /// Deterministic RNG for every random decision.
    pub rng: GameRng,
}

impl GameInstance {
    /// Create a fresh game. Player 1 is the human seat.
    #[must_use]
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        Self {
            settings,
            players: [
                Player::new(PlayerId::new(1), true),
                Player::new(PlayerId::new(2), false),
                Player::new(PlayerId::new(3), false),
                Player::new(PlayerId::new(4), false),
            ],
            phase: GamePhase::DealForDealer,
            deck: Vec::new(),
            kitty: Vec::new(),
            dealt_hands: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            discard: None,
            dealer: None,
            current_player: None,
            trump: None,
            maker: None,
            loner: false,
            deal_passes: 0,
            bid_passes: 0,
            current_trick: None,
            tricks: Vector::new(),
            results: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Borrow a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutably borrow a player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Accumulated points for a team across all scored hands.
    #[must_use]
    pub fn team_points(&self, team: Team) -> u32 {
        self.results
            .iter()
            .filter(|result| result.winning_team == team)
            .map(|result| result.points)
            .sum()
    }

    /// The sitting-out partner on a loner hand.
    #[must_use]
    pub fn sitting_out(&self) -> Option<PlayerId> {
        if self.loner {
            self.maker.map(PlayerId::partner)
        } else {
            None
        }
    }

    /// Seats actually playing the current hand (3 on a loner, else 4).
    #[must_use]
    pub fn active_seats(&self) -> usize {
        if self.loner {
            3
        } else {
            4
        }
    }

    /// The face-up trump candidate: the top of the kitty.
    #[must_use]
    pub fn turned_card(&self) -> Option<Card> {
        self.kitty.first().copied()
    }

    /// The dealer, or an integrity error when no deal has happened.
    pub fn require_dealer(&self) -> EngineResult<PlayerId> {
        self.dealer.ok_or_else(|| {
            EngineError::integrity(IntegrityKind::MissingDealer, "no dealer assigned")
        })
    }

    /// The maker, or an integrity error when no trump was named.
    pub fn require_maker(&self) -> EngineResult<PlayerId> {
        self.maker
            .ok_or_else(|| EngineError::integrity(IntegrityKind::MissingMaker, "no maker recorded"))
    }

    /// The current player, or a precondition error.
    pub fn require_current_player(&self, context: &'static str) -> EngineResult<PlayerId> {
        self.current_player
            .ok_or(EngineError::precondition(context, "no current player"))
    }

    /// Clear per-hand state ahead of the next deal. The dealer, results, and
    /// RNG carry over.
    pub fn reset_for_next_hand(&mut self) {
        for player in &mut self.players {
            player.clear_hand();
        }
        self.deck.clear();
        self.kitty.clear();
        self.dealt_hands = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        self.discard = None;
        self.current_player = None;
        self.trump = None;
        self.maker = None;
        self.loner = false;
        self.bid_passes = 0;
        self.current_trick = None;
        self.tricks = Vector::new();
    }

    /// Serialize to bytes for the persistence shim.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore from bytes produced by [`GameInstance::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
