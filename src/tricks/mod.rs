//! Trick and hand engine: legality, winner resolution, and scoring.

pub mod legal;
pub mod scoring;
pub mod winner;

pub use legal::{cards_legal_to_play, did_follow_suit};
pub use scoring::{compute_hand_result, is_game_over, is_hand_finished, is_trick_finished};
pub use winner::{advance_after_play, resolve_trick_winner, winning_play, TRICKS_PER_HAND};
