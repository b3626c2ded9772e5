//! Automated bid and discard decisions.
//!
//! `determine_bid` enumerates every candidate trump for the round — in the
//! first round only the turned card's suit (with, for the dealer, every
//! possible pickup/discard swap), in the second every suit except the
//! turned-down one — scores each candidate hand, and decides whether to
//! order, whether to go alone, and what the dealer should discard. The
//! routine is deterministic for a fixed RNG state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::score::{
    hand_score, modifier_score, round_to_bid_step, BidContext, CALL_THRESHOLD, LONER_POINT_CAP,
    LONER_TRAILING_RELIEF, TABLETALK_BONUS, TABLETALK_PARTNER_THRESHOLD, TRAILING_MARGIN,
};
use crate::cards::{card_value, Card, Suit, Trump};
use crate::core::{Difficulty, EngineError, EngineResult, GameRng};
use crate::game::GameInstance;
use crate::players::PlayerId;

/// An automated player's bid decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResult {
    /// Who decided.
    pub player: PlayerId,
    /// Whether to order/name trump.
    pub order: bool,
    /// The chosen trump, present when `order` is true.
    pub trump: Option<Trump>,
    /// Whether to play alone.
    pub loner: bool,
    /// The dealer's chosen discard, when ordering up as dealer.
    pub discard: Option<Card>,
    /// The rounded composite score behind the decision.
    pub score: i32,
}

impl BidResult {
    /// A pass.
    #[must_use]
    pub fn pass(player: PlayerId, score: i32) -> Self {
        Self {
            player,
            order: false,
            trump: None,
            loner: false,
            discard: None,
            score,
        }
    }
}

/// One (trump, hand) pairing under evaluation.
struct Candidate {
    trump: Trump,
    hand: Vec<Card>,
    discard: Option<Card>,
}

/// Decide a bid for the current player.
///
/// Worst case evaluates (hand size + 1) × (suit count) candidates. The
/// stick-the-dealer override forces an order in the final bidding round
/// regardless of score.
pub fn determine_bid(
    game: &GameInstance,
    flip: Card,
    first_round: bool,
    rng: &mut GameRng,
) -> EngineResult<BidResult> {
    let bidder = game.require_current_player("determine_bid")?;
    let dealer = game.require_dealer()?;
    let hand = game.player(bidder).available_to_play();
    let bidder_points = game.team_points(bidder.team());
    let opponent_points = game.team_points(bidder.team().opponent());

    let mut candidates: Vec<Candidate> = Vec::new();
    if first_round {
        candidates.push(Candidate {
            trump: Trump::Turned(flip),
            hand: hand.clone(),
            // The dealer's no-swap option is discarding the pickup itself.
            discard: (bidder == dealer).then_some(flip),
        });
        if bidder == dealer {
            for (slot, &held) in hand.iter().enumerate() {
                let mut swapped = hand.clone();
                swapped[slot] = flip;
                candidates.push(Candidate {
                    trump: Trump::Turned(flip),
                    hand: swapped,
                    discard: Some(held),
                });
            }
        }
    } else {
        for suit in Suit::ALL {
            if suit != flip.suit {
                candidates.push(Candidate {
                    trump: Trump::Named(suit),
                    hand: hand.clone(),
                    discard: None,
                });
            }
        }
    }

    // Highest raw composite wins; first found wins ties.
    let mut best_index = 0;
    let mut best_raw = i32::MIN;
    for (index, candidate) in candidates.iter().enumerate() {
        let ctx = BidContext {
            hand: &candidate.hand,
            trump: candidate.trump.suit(),
            turned: first_round.then_some(flip),
            first_round,
            bidder,
            dealer,
            stick_the_dealer: game.settings.stick_the_dealer,
            bidder_points,
            opponent_points,
        };
        let raw = hand_score(&candidate.hand, ctx.trump) + modifier_score(&ctx);
        if raw > best_raw {
            best_raw = raw;
            best_index = index;
        }
    }
    let best = &candidates[best_index];

    let jitter = game.settings.difficulty.bid_jitter(rng);
    let natural = round_to_bid_step(best_raw + jitter);
    let mut score = natural;

    // Table-talk: a glance at the partner's hand may rescue a bid that fell
    // short, but never inflates one that already qualifies.
    if game.settings.difficulty == Difficulty::TableTalk && score < CALL_THRESHOLD {
        let partner_hand = game.player(bidder.partner()).available_to_play();
        if hand_score(&partner_hand, best.trump.suit()) > TABLETALK_PARTNER_THRESHOLD {
            score += TABLETALK_BONUS;
        }
    }

    let mut order = score >= CALL_THRESHOLD;
    if !first_round && game.settings.stick_the_dealer && bidder == dealer {
        order = true;
    }

    let trailing = opponent_points >= bidder_points + TRAILING_MARGIN;
    let mut loner_threshold = game.settings.difficulty.loner_threshold();
    if trailing {
        loner_threshold -= LONER_TRAILING_RELIEF;
    }
    // The table-talk bonus never counts toward going alone.
    let loner = order && bidder_points < LONER_POINT_CAP && natural >= loner_threshold;

    if !order {
        return Ok(BidResult::pass(bidder, score));
    }

    let result = BidResult {
        player: bidder,
        order,
        trump: Some(best.trump),
        loner,
        discard: if first_round && bidder == dealer {
            best.discard
        } else {
            None
        },
        score,
    };
    debug!(%bidder, trump = %best.trump, loner, score, "bid decided");
    Ok(result)
}

/// Pick the dealer's discard after an order-up.
///
/// Chooses the lowest-valued card available, defensively including the
/// turned card itself in the comparison pool, with a difficulty-scaled
/// jitter per candidate. Ties go to the first candidate found.
pub fn determine_discard(
    game: &GameInstance,
    player: PlayerId,
    rng: &mut GameRng,
) -> EngineResult<Card> {
    let Some(trump) = game.trump else {
        return Err(EngineError::precondition(
            "determine_discard",
            "trump not fixed",
        ));
    };

    let mut pool = game.player(player).available_to_play();
    if let Some(turned) = trump.turned_card() {
        if !pool.contains(&turned) {
            pool.push(turned);
        }
    }
    if pool.is_empty() {
        return Err(EngineError::precondition(
            "determine_discard",
            "player has no cards",
        ));
    }

    let mut best = pool[0];
    let mut best_value = i32::MAX;
    for card in pool {
        let value =
            card_value(card, Some(trump.suit())) + game.settings.difficulty.discard_jitter(rng);
        if value < best_value {
            best_value = value;
            best = card;
        }
    }
    Ok(best)
}
