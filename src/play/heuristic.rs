//! Automated card selection during a trick.
//!
//! Reuses the ranking tables and the provisional-winner scan: lead strength
//! when on the attack, otherwise win the trick as cheaply as possible or
//! throw off the weakest legal card. Novice players occasionally play a
//! random legal card instead.

use crate::cards::{card_value, Card};
use crate::core::{Difficulty, EngineError, EngineResult, GameRng};
use crate::flow::phase::GamePhase;
use crate::game::GameInstance;
use crate::tricks::{cards_legal_to_play, winning_play};

/// One-in-N chance a novice ignores the heuristic.
const NOVICE_FUMBLE: i32 = 4;

/// Choose a card for the current player.
///
/// Always returns a member of the legal set for the open trick.
pub fn determine_card_to_play(game: &GameInstance, rng: &mut GameRng) -> EngineResult<Card> {
    if game.phase != GamePhase::PlayTricks {
        return Err(EngineError::precondition(
            "determine_card_to_play",
            "not in the play phase",
        ));
    }
    let player = game.require_current_player("determine_card_to_play")?;
    let Some(trump) = game.trump else {
        return Err(EngineError::precondition(
            "determine_card_to_play",
            "trump not fixed",
        ));
    };
    let Some(trick) = &game.current_trick else {
        return Err(EngineError::precondition(
            "determine_card_to_play",
            "no open trick",
        ));
    };

    let available = game.player(player).available_to_play();
    let lead = trick.lead().map(|play| play.card);
    let legal = cards_legal_to_play(Some(trump.suit()), lead, &available);
    if legal.is_empty() {
        return Err(EngineError::precondition(
            "determine_card_to_play",
            "player has no cards",
        ));
    }

    if game.settings.difficulty == Difficulty::Novice && rng.gen_range(0..NOVICE_FUMBLE) == 0 {
        return Ok(*rng.choose(&legal).expect("legal set is non-empty"));
    }

    let value = |card: Card| card_value(card, Some(trump.suit()));

    let Some(current_winner) = winning_play(trump.suit(), trick) else {
        // Leading. The maker's side presses with its best card; defenders
        // keep trump back and lead their best off-suit when they can.
        let maker_side = game
            .maker
            .is_some_and(|maker| maker.team() == player.team());
        let pool: Vec<Card> = if maker_side {
            legal.clone()
        } else {
            let off_suit: Vec<Card> = legal
                .iter()
                .copied()
                .filter(|card| crate::cards::effective_suit(*card, Some(trump.suit())) != trump.suit())
                .collect();
            if off_suit.is_empty() {
                legal.clone()
            } else {
                off_suit
            }
        };
        return Ok(best_by(&pool, |c| value(c)));
    };

    // Partner already has the trick: throw off the cheapest card.
    if current_winner.player == player.partner() {
        return Ok(worst_by(&legal, |c| value(c)));
    }

    // Win as cheaply as possible, if winning is possible at all.
    let winner_value = value(current_winner.card);
    let lead_card = trick.lead().expect("winner implies a lead").card;
    let lead_suit = crate::cards::effective_suit(lead_card, Some(trump.suit()));
    let cheapest_winner = legal
        .iter()
        .copied()
        .filter(|card| {
            let suit = crate::cards::effective_suit(*card, Some(trump.suit()));
            (suit == lead_suit || suit == trump.suit()) && value(*card) > winner_value
        })
        .min_by_key(|card| value(*card));

    Ok(match cheapest_winner {
        Some(card) => card,
        None => worst_by(&legal, |c| value(c)),
    })
}

fn best_by(cards: &[Card], value: impl Fn(Card) -> i32) -> Card {
    *cards
        .iter()
        .max_by_key(|card| value(**card))
        .expect("non-empty")
}

fn worst_by(cards: &[Card], value: impl Fn(Card) -> i32) -> Card {
    *cards
        .iter()
        .min_by_key(|card| value(**card))
        .expect("non-empty")
}
