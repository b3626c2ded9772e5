//! Player identity, partnerships, and the fixed seat rotation.

pub mod player;
pub mod rotation;

pub use player::{Player, PlayerId, Seat, Team};
pub use rotation::{next_player, order_from, rotation_from, SEAT_CYCLE};
