//! Turn rotation around the fixed seat cycle.
//!
//! The seat cycle is 1→3→2→4→1…, which alternates teams every turn.
//! Bidding, dealing, and trick play all advance through this cycle; a loner
//! hand simply excludes the sitting-out partner from the rotation.

use smallvec::SmallVec;

use super::player::PlayerId;

/// The fixed seat cycle.
pub const SEAT_CYCLE: [PlayerId; 4] = [PlayerId(1), PlayerId(3), PlayerId(2), PlayerId(4)];

/// Position of a player in the seat cycle.
fn cycle_position(id: PlayerId) -> usize {
    SEAT_CYCLE
        .iter()
        .position(|&p| p == id)
        .expect("every player is in the seat cycle")
}

/// The players following `start` in seat-cycle order, with `start` itself
/// last, optionally excluding a sitting-out player.
///
/// Always 4 entries (or 3 with an exclusion); never contains the excluded
/// player. This ordering drives dealing and bidding, both of which begin
/// with the player after the dealer and end on the dealer.
#[must_use]
pub fn rotation_from(start: PlayerId, sitting_out: Option<PlayerId>) -> SmallVec<[PlayerId; 4]> {
    let from = cycle_position(start);
    (1..=4)
        .map(|offset| SEAT_CYCLE[(from + offset) % 4])
        .filter(|id| Some(*id) != sitting_out)
        .collect()
}

/// Seat-cycle order for a trick: the leader first, then around the table,
/// optionally excluding a sitting-out player.
#[must_use]
pub fn order_from(leader: PlayerId, sitting_out: Option<PlayerId>) -> SmallVec<[PlayerId; 4]> {
    let from = cycle_position(leader);
    (0..4)
        .map(|offset| SEAT_CYCLE[(from + offset) % 4])
        .filter(|id| Some(*id) != sitting_out)
        .collect()
}

/// The player whose turn follows `current`, skipping a sitting-out player.
#[must_use]
pub fn next_player(current: PlayerId, sitting_out: Option<PlayerId>) -> PlayerId {
    rotation_from(current, sitting_out)[0]
}
