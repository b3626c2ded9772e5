//! Deal mechanics and deal integrity checks.

pub mod deal;

pub use deal::{deal_hand, verify_deal, HAND_SIZE, KITTY_SIZE};
