//! Bid heuristic scenarios.

use euchre_engine::core::{Difficulty, GameRng, GameSettings};
use euchre_engine::flow::{BidRound, GamePhase};
use euchre_engine::{
    determine_bid, determine_discard, Card, GameInstance, PlayerId, Rank, Suit, Trump,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank, 0)
}

fn bidding_game(settings: GameSettings, bidder: u8, dealer: u8, hand: Vec<Card>) -> GameInstance {
    let mut game = GameInstance::new(settings, 42);
    game.phase = GamePhase::Bidding(BidRound::First);
    game.dealer = Some(PlayerId::new(dealer));
    game.current_player = Some(PlayerId::new(bidder));
    game.player_mut(PlayerId::new(bidder)).hand = hand;
    game
}

/// The dealer holding two clubs and an off-suit ace must order up a turned
/// J♣: absorbing the right bower qualifies the hand.
#[test]
fn dealer_orders_up_a_turned_jack() {
    let settings = GameSettings::new().with_difficulty(Difficulty::Expert);
    let game = bidding_game(
        settings,
        1,
        1,
        vec![
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    assert!(!game.settings.stick_the_dealer);

    let flip = card(Suit::Clubs, Rank::Jack);
    let bid = determine_bid(&game, flip, true, &mut GameRng::new(0)).unwrap();

    assert!(bid.order);
    assert_eq!(bid.trump.unwrap().suit(), Suit::Clubs);
    assert!(bid.discard.is_some());
}

/// Expert bids are deterministic: no jitter, same decision every time.
#[test]
fn expert_bids_are_reproducible() {
    let game = bidding_game(
        GameSettings::new(),
        3,
        1,
        vec![
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Ace),
        ],
    );
    let flip = card(Suit::Hearts, Rank::Nine);

    let decisions: Vec<_> = (0..10)
        .map(|seed| determine_bid(&game, flip, true, &mut GameRng::new(seed)).unwrap())
        .collect();
    for pair in decisions.windows(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

/// A strong all-trump hand orders and goes alone below the point cap.
#[test]
fn monster_hand_goes_alone() {
    let game = bidding_game(
        GameSettings::new(),
        2,
        1,
        vec![
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::King),
            card(Suit::Hearts, Rank::Queen),
        ],
    );
    let flip = card(Suit::Hearts, Rank::Nine);

    let bid = determine_bid(&game, flip, true, &mut GameRng::new(0)).unwrap();
    assert!(bid.order);
    assert!(bid.loner);
    // A non-dealer order never carries a discard.
    assert!(bid.discard.is_none());
}

/// Garbage passes in round one and round two.
#[test]
fn junk_hand_passes_both_rounds() {
    let hand = vec![
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Queen),
    ];
    let game = bidding_game(GameSettings::new(), 3, 1, hand);
    let flip = card(Suit::Clubs, Rank::Nine);

    let first = determine_bid(&game, flip, true, &mut GameRng::new(0)).unwrap();
    assert!(!first.order);

    let mut game = game;
    game.phase = GamePhase::Bidding(BidRound::Second);
    let second = determine_bid(&game, flip, false, &mut GameRng::new(0)).unwrap();
    assert!(!second.order);
}

/// Second-round candidates never include the turned-down suit.
#[test]
fn second_round_excludes_turned_suit() {
    for seed in 0..20 {
        let game = bidding_game(
            GameSettings::new().with_difficulty(Difficulty::Novice),
            3,
            1,
            vec![
                card(Suit::Spades, Rank::Jack),
                card(Suit::Spades, Rank::Ace),
                card(Suit::Spades, Rank::King),
                card(Suit::Clubs, Rank::Jack),
                card(Suit::Hearts, Rank::Ace),
            ],
        );
        let flip = card(Suit::Spades, Rank::Nine);
        let bid = determine_bid(&game, flip, false, &mut GameRng::new(seed)).unwrap();
        if let Some(trump) = bid.trump {
            assert_ne!(trump.suit(), Suit::Spades, "seed {seed}");
        }
    }
}

/// The stuck dealer orders in the second round no matter how weak the hand.
#[test]
fn stick_the_dealer_forces_the_order() {
    let settings = GameSettings::new().with_stick_the_dealer(true);
    let mut game = bidding_game(
        settings,
        1,
        1,
        vec![
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Diamonds, Rank::Queen),
        ],
    );
    game.phase = GamePhase::Bidding(BidRound::Second);
    let flip = card(Suit::Clubs, Rank::Nine);

    let bid = determine_bid(&game, flip, false, &mut GameRng::new(0)).unwrap();
    assert!(bid.order);
    assert_ne!(bid.trump.unwrap().suit(), Suit::Clubs);
}

/// Table-talk may rescue a borderline bid when the partner is loaded, but
/// expert play with the identical cards stays a pass.
#[test]
fn tabletalk_peeks_at_a_loaded_partner() {
    let hand = vec![
        card(Suit::Spades, Rank::Jack),
        card(Suit::Spades, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Diamonds, Rank::Ten),
    ];
    // Partner holds the left bower and trump ace.
    let partner_hand = vec![
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::King),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
    ];
    let flip = card(Suit::Spades, Rank::Ten);

    let mut expert_game = bidding_game(GameSettings::new(), 3, 2, hand.clone());
    expert_game.player_mut(PlayerId::new(4)).hand = partner_hand.clone();
    let expert = determine_bid(&expert_game, flip, true, &mut GameRng::new(0)).unwrap();
    assert!(!expert.order, "expert falls short at {}", expert.score);

    let mut tt_game = bidding_game(
        GameSettings::new().with_difficulty(Difficulty::TableTalk),
        3,
        2,
        hand,
    );
    tt_game.player_mut(PlayerId::new(4)).hand = partner_hand;
    let tabletalk = determine_bid(&tt_game, flip, true, &mut GameRng::new(0)).unwrap();
    assert!(tabletalk.order);
    assert_eq!(tabletalk.score, expert.score + 100);
    // The cheat bonus cannot push a bid into a loner.
    assert!(!tabletalk.loner);
}

/// The dealer's discard choice avoids trump and bowers.
#[test]
fn discard_dumps_the_weakest_card() {
    let mut game = bidding_game(
        GameSettings::new(),
        1,
        1,
        vec![
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Clubs, Rank::King),
            card(Suit::Spades, Rank::Jack), // left bower
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );
    game.trump = Some(Trump::Turned(card(Suit::Clubs, Rank::Ten)));

    let discard = determine_discard(&game, PlayerId::new(1), &mut GameRng::new(0)).unwrap();
    assert_eq!(discard, card(Suit::Diamonds, Rank::Nine));
}
