//! Phase sequencing and the game-flow state machine.

pub mod machine;
pub mod phase;

pub use machine::{
    apply_discard, begin_next_hand, deal_for_dealer, new_game, order_trump, pass_bid, score_hand,
    shuffle_and_deal, DealerDraw,
};
pub use phase::{BidRound, GamePhase};
