//! Hand scoring and the finished/game-over predicates.

use tracing::debug;

use super::winner::TRICKS_PER_HAND;
use crate::cards::{verify_deck, Card};
use crate::core::{EngineError, EngineResult};
use crate::game::{GameInstance, HandOutcome, HandResult, WINNING_SCORE};
use crate::players::Team;

/// Points for making trump with three or four tricks.
const POINTS_MADE: u32 = 1;

/// Points for a sweep, a euchre, or a renege award.
const POINTS_MARCH: u32 = 2;

/// Points for a loner sweep or a renege award against a loner.
const POINTS_LONER: u32 = 4;

/// True when the open trick (if any) can accept no more plays.
#[must_use]
pub fn is_trick_finished(game: &GameInstance) -> bool {
    match &game.current_trick {
        None => true,
        Some(trick) => trick.renege.is_some() || trick.plays.len() == game.active_seats(),
    }
}

/// True when the hand is over: a renege was recorded or all five tricks
/// have takers.
#[must_use]
pub fn is_hand_finished(game: &GameInstance) -> bool {
    if game.tricks.iter().any(|trick| trick.renege.is_some()) {
        return true;
    }
    game.tricks.len() == TRICKS_PER_HAND && game.tricks.iter().all(|trick| trick.taker.is_some())
}

/// True the instant either team's accumulated points reach the winning
/// score.
#[must_use]
pub fn is_game_over(game: &GameInstance) -> bool {
    game.team_points(Team::One) >= WINNING_SCORE || game.team_points(Team::Two) >= WINNING_SCORE
}

/// Score a finished hand into an immutable snapshot.
///
/// Validates that the hand actually finished and that the 24 dealt cards
/// are still accounted for before awarding anything; malformed states are
/// integrity errors, never silently mis-scored.
pub fn compute_hand_result(game: &GameInstance) -> EngineResult<HandResult> {
    let maker = game.require_maker()?;
    let dealer = game.require_dealer()?;
    let Some(trump) = game.trump else {
        return Err(EngineError::precondition(
            "compute_hand_result",
            "trump not fixed",
        ));
    };
    if !is_hand_finished(game) {
        return Err(EngineError::precondition(
            "compute_hand_result",
            "hand is not finished",
        ));
    }

    // The dealt hands plus the kitty must still be the 24 distinct cards;
    // the discard swap moves cards between them but never in or out.
    let mut all: Vec<Card> = Vec::with_capacity(24);
    for hand in &game.dealt_hands {
        all.extend_from_slice(hand);
    }
    all.extend_from_slice(&game.kitty);
    verify_deck(&all)?;

    let maker_team = maker.team();
    let renege = game.tricks.iter().find_map(|trick| trick.renege);

    let (outcome, winning_team, points) = if let Some(offender) = renege {
        let awarded = offender.team().opponent();
        let points = if game.loner { POINTS_LONER } else { POINTS_MARCH };
        (HandOutcome::Renege(offender), awarded, points)
    } else {
        let maker_tricks = game
            .tricks
            .iter()
            .filter(|trick| trick.taker.map(|taker| taker.team()) == Some(maker_team))
            .count();
        match maker_tricks {
            TRICKS_PER_HAND => {
                let points = if game.loner { POINTS_LONER } else { POINTS_MARCH };
                (HandOutcome::Swept, maker_team, points)
            }
            3 | 4 => (HandOutcome::Made, maker_team, POINTS_MADE),
            _ => (HandOutcome::Euchred, maker_team.opponent(), POINTS_MARCH),
        }
    };

    debug!(%maker, ?outcome, %winning_team, points, "hand scored");
    Ok(HandResult {
        dealer,
        maker,
        winning_team,
        points,
        loner: game.loner,
        trump,
        discard: game.discard,
        kitty: game.kitty.clone(),
        dealt_hands: game.dealt_hands.clone(),
        tricks: game.tricks.clone(),
        outcome,
    })
}
