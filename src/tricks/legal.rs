//! Follow-suit legality.
//!
//! The suit to follow is the lead card's *effective* suit: a left-bower lead
//! calls for trump, not its printed suit. A player holding any card of that
//! suit may only play those cards; a void player may play anything. These
//! checks back both automated play and human-input validation.

use crate::cards::{effective_suit, Card, Suit};
use crate::game::GameInstance;
use crate::players::PlayerId;

/// The subset of `candidates` legal to play against `lead`.
///
/// With no lead yet (the acting player leads), every candidate is legal.
#[must_use]
pub fn cards_legal_to_play(
    trump: Option<Suit>,
    lead: Option<Card>,
    candidates: &[Card],
) -> Vec<Card> {
    let Some(lead) = lead else {
        return candidates.to_vec();
    };

    let suit_to_follow = effective_suit(lead, trump);
    let following: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|card| effective_suit(*card, trump) == suit_to_follow)
        .collect();

    if following.is_empty() {
        candidates.to_vec()
    } else {
        following
    }
}

/// Whether `player` playing `card` into the open trick follows suit.
///
/// True when no lead exists yet or the player led. A false result signals a
/// renege.
#[must_use]
pub fn did_follow_suit(game: &GameInstance, player: PlayerId, card: Card) -> bool {
    let Some(trick) = &game.current_trick else {
        return true;
    };
    let Some(lead) = trick.lead() else {
        return true;
    };
    if lead.player == player {
        return true;
    }

    let trump = game.trump.map(|t| t.suit());
    let available = game.player(player).available_to_play();
    cards_legal_to_play(trump, Some(lead.card), &available).contains(&card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Trump};
    use crate::core::GameSettings;
    use crate::game::{Trick, TrickPlay};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank, 0)
    }

    #[test]
    fn test_no_lead_everything_legal() {
        let candidates = [card(Suit::Hearts, Rank::Nine), card(Suit::Clubs, Rank::Ace)];
        let legal = cards_legal_to_play(Some(Suit::Spades), None, &candidates);
        assert_eq!(legal, candidates.to_vec());
    }

    #[test]
    fn test_must_follow_when_holding_suit() {
        let candidates = [
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ace),
        ];
        let legal = cards_legal_to_play(
            Some(Suit::Spades),
            Some(card(Suit::Hearts, Rank::Ten)),
            &candidates,
        );
        assert_eq!(
            legal,
            vec![card(Suit::Hearts, Rank::Nine), card(Suit::Hearts, Rank::King)]
        );
    }

    #[test]
    fn test_void_plays_anything() {
        let candidates = [card(Suit::Clubs, Rank::Ace), card(Suit::Diamonds, Rank::Nine)];
        let legal = cards_legal_to_play(
            Some(Suit::Spades),
            Some(card(Suit::Hearts, Rank::Ten)),
            &candidates,
        );
        assert_eq!(legal, candidates.to_vec());
    }

    #[test]
    fn test_left_bower_lead_calls_for_trump() {
        // J♣ led with spades trump: the suit to follow is spades.
        let candidates = [
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ace),
        ];
        let legal = cards_legal_to_play(
            Some(Suit::Spades),
            Some(card(Suit::Clubs, Rank::Jack)),
            &candidates,
        );
        assert_eq!(legal, vec![card(Suit::Spades, Rank::Nine)]);
    }

    #[test]
    fn test_left_bower_follows_trump_lead() {
        // Spades led, player holds J♣ (left bower): it counts as spades.
        let candidates = [card(Suit::Clubs, Rank::Jack), card(Suit::Hearts, Rank::Nine)];
        let legal = cards_legal_to_play(
            Some(Suit::Spades),
            Some(card(Suit::Spades, Rank::Ace)),
            &candidates,
        );
        assert_eq!(legal, vec![card(Suit::Clubs, Rank::Jack)]);
    }

    #[test]
    fn test_did_follow_suit() {
        let mut game = GameInstance::new(GameSettings::new(), 42);
        game.trump = Some(Trump::Named(Suit::Spades));

        let leader = PlayerId::new(1);
        let follower = PlayerId::new(3);
        game.player_mut(follower).hand = vec![
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Ace),
        ];

        // No trick open: trivially follows.
        assert!(did_follow_suit(&game, follower, card(Suit::Clubs, Rank::Ace)));

        let mut trick = Trick::new(0);
        trick.plays.push(TrickPlay {
            player: leader,
            card: card(Suit::Hearts, Rank::Ten),
        });
        game.current_trick = Some(trick);

        // The leader always follows their own lead.
        assert!(did_follow_suit(&game, leader, card(Suit::Hearts, Rank::Ten)));
        // Holding hearts, a heart follows and a club reneges.
        assert!(did_follow_suit(&game, follower, card(Suit::Hearts, Rank::Nine)));
        assert!(!did_follow_suit(&game, follower, card(Suit::Clubs, Rank::Ace)));
    }
}
