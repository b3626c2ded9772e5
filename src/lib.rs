//! # euchre-engine
//!
//! A pure rules engine for four-player euchre: two partnerships, 24 cards,
//! first team to ten points.
//!
//! ## Design Principles
//!
//! 1. **Pure transformations**: Every operation takes a state value and
//!    returns a new one (or an explicit result/error). Nothing is mutated
//!    across a function boundary and nothing blocks.
//!
//! 2. **Injectable randomness**: Shuffles, the deal split, the dealer draw,
//!    and difficulty jitter all draw from a seeded, serializable RNG, so
//!    any game is reproducible and any hand replayable.
//!
//! 3. **Loud invariants**: Deal and scoring paths re-verify the 24-card
//!    universe and fail with descriptive integrity errors instead of
//!    mis-scoring a corrupt state.
//!
//! The presentation layer owns rendering, input, and timing; it drives the
//! flow machine one call at a time and renders the returned snapshots.
//!
//! ## Modules
//!
//! - `core`: RNG, settings, errors
//! - `cards`: suits, ranks, contextual ranking, the deck
//! - `players`: identity, partnerships, seat rotation
//! - `game`: the game aggregate, tricks, hand results
//! - `deal`: deal mechanics and integrity checks
//! - `bid`: the bid-for-trump heuristic
//! - `tricks`: follow-suit legality, trick winners, hand scoring
//! - `play`: the automated card-play heuristic
//! - `flow`: phase sequencing state machine

pub mod bid;
pub mod cards;
pub mod core;
pub mod deal;
pub mod flow;
pub mod game;
pub mod play;
pub mod players;
pub mod tricks;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EngineError, EngineResult, GameRng, GameRngState, GameSettings, GameSpeed,
    IllegalAction, IntegrityKind,
};

pub use crate::cards::{
    build_deck, card_value, effective_suit, is_left_bower, is_right_bower, shuffle, suit_counts,
    verify_deck, Card, Rank, Suit, SuitColor, Trump, DECK_SIZE,
};

pub use crate::players::{
    next_player, order_from, rotation_from, Player, PlayerId, Seat, Team,
};

pub use crate::game::{
    GameInstance, HandOutcome, HandResult, Trick, TrickPlay, WINNING_SCORE,
};

pub use crate::deal::{deal_hand, verify_deal, HAND_SIZE, KITTY_SIZE};

pub use crate::bid::{determine_bid, determine_discard, BidResult, CALL_THRESHOLD};

pub use crate::tricks::{
    advance_after_play, cards_legal_to_play, compute_hand_result, did_follow_suit, is_game_over,
    is_hand_finished, is_trick_finished, resolve_trick_winner, winning_play, TRICKS_PER_HAND,
};

pub use crate::play::determine_card_to_play;

pub use crate::flow::{
    apply_discard, begin_next_hand, deal_for_dealer, new_game, order_trump, pass_bid, score_hand,
    shuffle_and_deal, BidRound, DealerDraw, GamePhase,
};
