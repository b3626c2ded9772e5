//! The bid engine: heuristic scoring and automated bid/discard decisions.

pub mod engine;
pub mod score;

pub use engine::{determine_bid, determine_discard, BidResult};
pub use score::{
    hand_score, modifier_score, round_to_bid_step, BidContext, CALL_THRESHOLD, LONER_POINT_CAP,
    SCORE_RULES, TABLETALK_BONUS, TABLETALK_PARTNER_THRESHOLD,
};
