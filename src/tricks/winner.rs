//! Trick resolution and play advancement.

use tracing::{debug, warn};

use super::legal::did_follow_suit;
use crate::cards::{card_value, effective_suit, Card, Suit};
use crate::core::{EngineError, EngineResult, IllegalAction};
use crate::flow::phase::GamePhase;
use crate::game::{GameInstance, Trick, TrickPlay};
use crate::players::{next_player, PlayerId};

/// Tricks in a hand.
pub const TRICKS_PER_HAND: usize = 5;

/// The play currently winning the (possibly incomplete) trick.
///
/// Starts from the lead and lets a later play supersede only if it follows
/// the lead's effective suit or is trump, with strictly higher value. Only
/// actual plays participate; a sitting-out bookkeeping entry never does.
#[must_use]
pub fn winning_play(trump: Suit, trick: &Trick) -> Option<TrickPlay> {
    let lead = trick.lead()?;
    let lead_suit = effective_suit(lead.card, Some(trump));

    let mut winner = *lead;
    let mut winner_value = card_value(lead.card, Some(trump));
    for play in trick.plays.iter().skip(1) {
        let suit = effective_suit(play.card, Some(trump));
        if suit != lead_suit && suit != trump {
            continue;
        }
        let value = card_value(play.card, Some(trump));
        if value > winner_value {
            winner = *play;
            winner_value = value;
        }
    }
    Some(winner)
}

/// Resolve the winner of a trick.
///
/// Fails with a precondition error on an empty trick; ties cannot occur
/// because card values are injective within a trick's trump context.
pub fn resolve_trick_winner(trump: Suit, trick: &Trick) -> EngineResult<PlayerId> {
    winning_play(trump, trick)
        .map(|play| play.player)
        .ok_or(EngineError::precondition(
            "resolve_trick_winner",
            "trick has no plays",
        ))
}

/// Play a card for the current player and advance the trick.
///
/// Validates the card is held and (when enforcement is on) follows suit
/// before touching any state. Without enforcement, a failure to follow suit
/// is recorded as a renege: the trick ends immediately, the winner is still
/// resolved for attribution, and scoring awards the hand to the other team.
///
/// When the trick completes, the winner is resolved, a synthetic play is
/// recorded for a sitting-out loner partner (bookkeeping only), and the
/// winner leads the next trick. When the hand completes, `current_player`
/// clears; the flow machine takes over from there.
pub fn advance_after_play(game: &GameInstance, card: Card) -> EngineResult<GameInstance> {
    if game.phase != GamePhase::PlayTricks {
        return Err(EngineError::precondition(
            "advance_after_play",
            "not in the play phase",
        ));
    }
    let player = game.require_current_player("advance_after_play")?;
    let Some(trump) = game.trump else {
        return Err(EngineError::precondition(
            "advance_after_play",
            "trump not fixed",
        ));
    };
    if game.current_trick.is_none() {
        return Err(EngineError::precondition(
            "advance_after_play",
            "no open trick",
        ));
    }

    let available = game.player(player).available_to_play();
    if !available.contains(&card) {
        return Err(IllegalAction::CardNotHeld.into());
    }

    let followed = did_follow_suit(game, player, card);
    if !followed && game.settings.enforce_follow_suit {
        return Err(IllegalAction::MustFollowSuit.into());
    }

    let mut next = game.clone();
    let sitting_out = next.sitting_out();
    let mut trick = next.current_trick.take().expect("guarded above");

    next.player_mut(player).played.push(card);
    trick.plays.push(TrickPlay { player, card });

    if !followed {
        warn!(%player, %card, "renege recorded");
        trick.renege = Some(player);
        trick.taker = winning_play(trump.suit(), &trick).map(|play| play.player);
        next.tricks.push_back(trick);
        next.current_player = None;
        return Ok(next);
    }

    if trick.plays.len() == next.active_seats() {
        let winner = resolve_trick_winner(trump.suit(), &trick)?;
        trick.taker = Some(winner);

        if let Some(out) = sitting_out {
            let partner_cards = next.player(out).available_to_play();
            if let Some(&synthetic) = partner_cards.first() {
                next.player_mut(out).played.push(synthetic);
                trick.sitting_out = Some(TrickPlay {
                    player: out,
                    card: synthetic,
                });
            }
        }

        debug!(round = trick.round, %winner, "trick resolved");
        let round = trick.round;
        next.tricks.push_back(trick);

        if next.tricks.len() == TRICKS_PER_HAND {
            next.current_player = None;
        } else {
            next.current_trick = Some(Trick::new(round + 1));
            next.current_player = Some(winner);
        }
    } else {
        next.current_trick = Some(trick);
        next.current_player = Some(next_player(player, sitting_out));
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Trump};
    use crate::core::GameSettings;
    use crate::flow::phase::GamePhase;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank, 0)
    }

    fn play(n: u8, suit: Suit, rank: Rank) -> TrickPlay {
        TrickPlay {
            player: PlayerId::new(n),
            card: card(suit, rank),
        }
    }

    #[test]
    fn test_right_bower_wins_from_any_position() {
        // Lead 9♦, trump spades: the right bower beats the off-suit ace no
        // matter where it sits in the play order.
        for bower_position in 1..4 {
            let mut trick = Trick::new(0);
            let mut others = vec![
                play(3, Suit::Diamonds, Rank::King),
                play(2, Suit::Diamonds, Rank::Ace),
            ];
            trick.plays.push(play(1, Suit::Diamonds, Rank::Nine));
            others.insert(bower_position - 1, play(4, Suit::Spades, Rank::Jack));
            for p in others {
                trick.plays.push(p);
            }

            let winner = resolve_trick_winner(Suit::Spades, &trick).unwrap();
            assert_eq!(winner, PlayerId::new(4), "bower at position {bower_position}");
        }
    }

    #[test]
    fn test_left_bower_beats_plain_trump() {
        let mut trick = Trick::new(0);
        trick.plays.push(play(1, Suit::Spades, Rank::Ace));
        trick.plays.push(play(3, Suit::Clubs, Rank::Jack)); // left bower
        trick.plays.push(play(2, Suit::Spades, Rank::King));
        trick.plays.push(play(4, Suit::Hearts, Rank::Ace));

        let winner = resolve_trick_winner(Suit::Spades, &trick).unwrap();
        assert_eq!(winner, PlayerId::new(3));
    }

    #[test]
    fn test_off_suit_never_supersedes() {
        let mut trick = Trick::new(0);
        trick.plays.push(play(1, Suit::Diamonds, Rank::Nine));
        trick.plays.push(play(3, Suit::Hearts, Rank::Ace)); // off-suit ace

        let winner = resolve_trick_winner(Suit::Spades, &trick).unwrap();
        assert_eq!(winner, PlayerId::new(1));
    }

    #[test]
    fn test_empty_trick_is_a_precondition_error() {
        let trick = Trick::new(0);
        assert!(matches!(
            resolve_trick_winner(Suit::Spades, &trick),
            Err(EngineError::Precondition { .. })
        ));
    }

    fn playing_game() -> GameInstance {
        let mut game = GameInstance::new(GameSettings::new(), 42);
        game.phase = GamePhase::PlayTricks;
        game.dealer = Some(PlayerId::new(1));
        game.maker = Some(PlayerId::new(1));
        game.trump = Some(Trump::Named(Suit::Spades));
        game.current_trick = Some(Trick::new(0));
        game.current_player = Some(PlayerId::new(3));

        game.player_mut(PlayerId::new(1)).hand = vec![card(Suit::Spades, Rank::Ace)];
        game.player_mut(PlayerId::new(2)).hand = vec![card(Suit::Hearts, Rank::King)];
        game.player_mut(PlayerId::new(3)).hand = vec![card(Suit::Hearts, Rank::Nine)];
        game.player_mut(PlayerId::new(4)).hand = vec![card(Suit::Diamonds, Rank::Ten)];
        game
    }

    #[test]
    fn test_play_advances_to_next_player() {
        let game = playing_game();
        let next = advance_after_play(&game, card(Suit::Hearts, Rank::Nine)).unwrap();

        assert_eq!(next.current_player, Some(PlayerId::new(2)));
        let trick = next.current_trick.as_ref().unwrap();
        assert_eq!(trick.plays.len(), 1);
        assert!(trick.is_open());
        // Input untouched.
        assert!(game.current_trick.as_ref().unwrap().plays.is_empty());
    }

    #[test]
    fn test_unheld_card_rejected_without_mutation() {
        let game = playing_game();
        let err = advance_after_play(&game, card(Suit::Clubs, Rank::Ace)).unwrap_err();
        assert_eq!(err, EngineError::Illegal(IllegalAction::CardNotHeld));
    }

    #[test]
    fn test_enforced_follow_suit_rejects() {
        let mut game = playing_game();
        game.settings.enforce_follow_suit = true;
        // Player 3 leads a heart; player 2 holds a heart but tries a spade.
        let next = advance_after_play(&game, card(Suit::Hearts, Rank::Nine)).unwrap();
        let mut next = next;
        next.player_mut(PlayerId::new(2)).hand = vec![
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Nine),
        ];

        let err = advance_after_play(&next, card(Suit::Spades, Rank::Nine)).unwrap_err();
        assert_eq!(err, EngineError::Illegal(IllegalAction::MustFollowSuit));
    }

    #[test]
    fn test_unenforced_breach_records_renege() {
        let game = playing_game();
        let next = advance_after_play(&game, card(Suit::Hearts, Rank::Nine)).unwrap();
        let mut next = next;
        next.player_mut(PlayerId::new(2)).hand = vec![
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Nine),
        ];

        let after = advance_after_play(&next, card(Suit::Spades, Rank::Nine)).unwrap();
        let trick = after.tricks.last().unwrap();
        assert_eq!(trick.renege, Some(PlayerId::new(2)));
        // Winner still resolved for attribution.
        assert!(trick.taker.is_some());
        assert!(after.current_player.is_none());
        assert!(after.current_trick.is_none());
    }

    #[test]
    fn test_full_trick_resolves_and_winner_leads() {
        let mut game = playing_game();
        game.current_player = Some(PlayerId::new(1));
        // Give everyone a second card so the hand is not over.
        for id in PlayerId::all() {
            game.player_mut(id).hand.push(card(Suit::Clubs, id_rank(id)));
        }

        let mut state = game;
        for (player, played) in [
            (1, card(Suit::Spades, Rank::Ace)),
            (3, card(Suit::Hearts, Rank::Nine)),
            (2, card(Suit::Hearts, Rank::King)),
            (4, card(Suit::Diamonds, Rank::Ten)),
        ] {
            assert_eq!(state.current_player, Some(PlayerId::new(player)));
            state = advance_after_play(&state, played).unwrap();
        }

        assert_eq!(state.tricks.len(), 1);
        let trick = state.tricks.last().unwrap();
        assert_eq!(trick.taker, Some(PlayerId::new(1)));
        // The winner leads the next trick.
        assert_eq!(state.current_player, Some(PlayerId::new(1)));
        assert_eq!(state.current_trick.as_ref().unwrap().round, 1);
    }

    fn id_rank(id: PlayerId) -> Rank {
        match id.number() {
            1 => Rank::Nine,
            2 => Rank::Ten,
            3 => Rank::Queen,
            _ => Rank::King,
        }
    }

    #[test]
    fn test_loner_trick_completes_with_three_plays() {
        let mut game = playing_game();
        game.loner = true;
        game.maker = Some(PlayerId::new(1)); // player 2 sits out
        game.current_player = Some(PlayerId::new(1));
        for id in PlayerId::all() {
            game.player_mut(id).hand.push(card(Suit::Clubs, id_rank(id)));
        }

        let mut state = game;
        for (player, played) in [
            (1, card(Suit::Spades, Rank::Ace)),
            (3, card(Suit::Hearts, Rank::Nine)),
            (4, card(Suit::Diamonds, Rank::Ten)),
        ] {
            assert_eq!(state.current_player, Some(PlayerId::new(player)));
            state = advance_after_play(&state, played).unwrap();
        }

        assert_eq!(state.tricks.len(), 1);
        let trick = state.tricks.last().unwrap();
        assert_eq!(trick.plays.len(), 3);
        assert_eq!(trick.taker, Some(PlayerId::new(1)));
        // The sitting-out partner got a synthetic bookkeeping entry.
        let synthetic = trick.sitting_out.unwrap();
        assert_eq!(synthetic.player, PlayerId::new(2));
    }
}
