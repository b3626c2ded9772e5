//! The game-flow state machine.
//!
//! Drives a hand from the dealer draw through shuffle/deal, two bidding
//! rounds, the order/discard step, trick play, and scoring, then loops to
//! the next deal until a team reaches the winning score. Every function
//! takes a `GameInstance` and returns a fresh one; the input is never
//! mutated.
//!
//! A deal where all eight bids pass rotates the dealer and re-deals. That
//! loop is legal and uncapped; with stick-the-dealer on it cannot occur,
//! because the dealer is forced to name trump in the final round.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::phase::{BidRound, GamePhase};
use crate::cards::{build_deck, shuffle, verify_deck, Card, Rank, Trump};
use crate::core::{EngineError, EngineResult, GameSettings, IllegalAction};
use crate::deal::{deal_hand, verify_deal};
use crate::game::{GameInstance, HandResult, Trick};
use crate::players::{next_player, PlayerId, SEAT_CYCLE};
use crate::tricks::{compute_hand_result, is_game_over};

/// Shuffle passes per deal.
const SHUFFLE_PASSES: u32 = 3;

/// Outcome of the opening dealer draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerDraw {
    /// Who deals first.
    pub dealer: PlayerId,
    /// Every card drawn, in order, ending with the dealer's jack.
    pub transcript: Vec<(PlayerId, Card)>,
}

/// Create a fresh game in the dealer-draw phase.
#[must_use]
pub fn new_game(settings: GameSettings, seed: u64) -> GameInstance {
    GameInstance::new(settings, seed)
}

/// Draw for the first dealer: cards go face-up around the table and the
/// first jack deals.
pub fn deal_for_dealer(game: &GameInstance) -> EngineResult<(GameInstance, DealerDraw)> {
    if game.phase != GamePhase::DealForDealer {
        return Err(EngineError::precondition(
            "deal_for_dealer",
            "dealer already drawn",
        ));
    }

    let mut next = game.clone();
    let mut deck = build_deck();
    shuffle(&mut deck, SHUFFLE_PASSES, &mut next.rng);

    let mut transcript = Vec::new();
    let mut dealer = None;
    for (draw, &card) in deck.iter().enumerate() {
        let player = SEAT_CYCLE[draw % 4];
        transcript.push((player, card));
        if card.rank == Rank::Jack {
            dealer = Some(player);
            break;
        }
    }
    let dealer = dealer.expect("a full deck contains four jacks");

    next.dealer = Some(dealer);
    next.phase = GamePhase::ShuffleAndDeal;
    debug!(%dealer, draws = transcript.len(), "dealer drawn");
    Ok((next, DealerDraw { dealer, transcript }))
}

/// Shuffle and deal a new hand, or reconstruct a prior one.
///
/// With a replay snapshot, the exact prior deal — same hands, same kitty,
/// same turned card, same dealer — is rebuilt from the snapshot instead of
/// shuffling, and still passes the full deal verification.
pub fn shuffle_and_deal(
    game: &GameInstance,
    replay: Option<&HandResult>,
) -> EngineResult<GameInstance> {
    if game.phase != GamePhase::ShuffleAndDeal {
        return Err(EngineError::precondition(
            "shuffle_and_deal",
            "no deal is due",
        ));
    }

    let mut next = match replay {
        None => {
            let mut next = game.clone();
            let mut deck = build_deck();
            shuffle(&mut deck, SHUFFLE_PASSES, &mut next.rng);
            verify_deck(&deck)?;
            next.deck = deck;
            deal_hand(&next)?
        }
        Some(snapshot) => {
            let mut next = game.clone();
            next.reset_for_next_hand();
            next.dealer = Some(snapshot.dealer);
            for id in PlayerId::all() {
                next.player_mut(id).hand = snapshot.dealt_hands[id.index()].clone();
            }
            next.dealt_hands = snapshot.dealt_hands.clone();
            next.kitty = snapshot.kitty.clone();
            verify_deal(&next)?;
            next
        }
    };

    let dealer = next.require_dealer()?;
    next.phase = GamePhase::Bidding(BidRound::First);
    next.bid_passes = 0;
    next.current_player = Some(next_player(dealer, None));
    debug!(%dealer, replay = replay.is_some(), "hand dealt");
    Ok(next)
}

/// Record a pass by the current bidder.
///
/// Four passes end the round: the first round flows into the second, and a
/// passed-out second round rotates the dealer and forces a fresh deal.
pub fn pass_bid(game: &GameInstance) -> EngineResult<GameInstance> {
    let GamePhase::Bidding(round) = game.phase else {
        return Err(EngineError::precondition("pass_bid", "not bidding"));
    };
    let player = game.require_current_player("pass_bid")?;
    let dealer = game.require_dealer()?;

    if round == BidRound::Second && game.settings.stick_the_dealer && player == dealer {
        return Err(IllegalAction::DealerMustBid.into());
    }

    let mut next = game.clone();
    next.bid_passes += 1;

    if next.bid_passes < 4 {
        next.current_player = Some(next_player(player, None));
        return Ok(next);
    }

    match round {
        BidRound::First => {
            next.phase = GamePhase::Bidding(BidRound::Second);
            next.bid_passes = 0;
            next.current_player = Some(next_player(dealer, None));
        }
        BidRound::Second => {
            debug!(%dealer, "deal passed out");
            let new_dealer = next_player(dealer, None);
            next.reset_for_next_hand();
            next.deal_passes += 1;
            next.dealer = Some(new_dealer);
            next.phase = GamePhase::ShuffleAndDeal;
        }
    }
    Ok(next)
}

/// Fix trump for the hand.
///
/// First-round orders pick up the turned card; second-round calls name any
/// other suit. Moves to the discard step when the dealer physically picks
/// up (and is not a sitting-out loner partner), otherwise straight to play.
pub fn order_trump(
    game: &GameInstance,
    maker: PlayerId,
    trump: Trump,
    loner: bool,
) -> EngineResult<GameInstance> {
    let GamePhase::Bidding(round) = game.phase else {
        return Err(EngineError::precondition("order_trump", "not bidding"));
    };
    let dealer = game.require_dealer()?;
    let turned = game.turned_card().ok_or(EngineError::precondition(
        "order_trump",
        "no turned card in the kitty",
    ))?;

    match round {
        BidRound::First => {
            if trump != Trump::Turned(turned) {
                return Err(EngineError::precondition(
                    "order_trump",
                    "first-round trump must be the turned card",
                ));
            }
        }
        BidRound::Second => {
            if trump.turned_card().is_some() {
                return Err(EngineError::precondition(
                    "order_trump",
                    "second-round trump is named, not picked up",
                ));
            }
            if trump.suit() == turned.suit {
                return Err(IllegalAction::CannotBidTurnedSuit.into());
            }
        }
    }

    let mut next = game.clone();
    next.maker = Some(maker);
    next.trump = Some(trump);
    next.loner = loner;

    let sitting_out = next.sitting_out();
    let pickup = round == BidRound::First;
    if pickup && Some(dealer) != sitting_out {
        next.phase = GamePhase::Discard;
        next.current_player = Some(dealer);
    } else {
        next.phase = GamePhase::PlayTricks;
        next.current_trick = Some(Trick::new(0));
        next.current_player = Some(next_player(dealer, sitting_out));
    }

    debug!(%maker, %trump, loner, "trump ordered");
    Ok(next)
}

/// Apply the dealer's discard after an order-up and start play.
pub fn apply_discard(game: &GameInstance, card: Card) -> EngineResult<GameInstance> {
    if game.phase != GamePhase::Discard {
        return Err(EngineError::precondition(
            "apply_discard",
            "no discard is due",
        ));
    }
    let dealer = game.require_dealer()?;
    let turned = game
        .trump
        .and_then(Trump::turned_card)
        .ok_or(EngineError::precondition(
            "apply_discard",
            "trump was named, not picked up",
        ))?;

    let mut next = game.clone();
    next.player_mut(dealer).discard_for(card, turned)?;
    next.discard = (card != turned).then_some(card);
    next.phase = GamePhase::PlayTricks;
    next.current_trick = Some(Trick::new(0));
    next.current_player = Some(next_player(dealer, next.sitting_out()));
    debug!(%dealer, %card, "dealer discarded");
    Ok(next)
}

/// Score a finished hand and transition to the next phase.
///
/// Appends the result and moves to `GameOver` when a team has reached the
/// winning score, otherwise to `HandScored` awaiting the next deal.
pub fn score_hand(game: &GameInstance) -> EngineResult<(GameInstance, HandResult)> {
    if game.phase != GamePhase::PlayTricks {
        return Err(EngineError::precondition(
            "score_hand",
            "no hand is being played",
        ));
    }

    let result = compute_hand_result(game)?;
    let mut next = game.clone();
    next.results.push_back(result.clone());
    next.current_trick = None;
    next.current_player = None;
    next.phase = if is_game_over(&next) {
        GamePhase::GameOver
    } else {
        GamePhase::HandScored
    };
    Ok((next, result))
}

/// Rotate the deal to the next seat and ready the next hand.
pub fn begin_next_hand(game: &GameInstance) -> EngineResult<GameInstance> {
    if game.phase != GamePhase::HandScored {
        return Err(EngineError::precondition(
            "begin_next_hand",
            "hand not scored",
        ));
    }
    let dealer = game.require_dealer()?;

    let mut next = game.clone();
    next.reset_for_next_hand();
    next.dealer = Some(next_player(dealer, None));
    next.phase = GamePhase::ShuffleAndDeal;
    Ok(next)
}
