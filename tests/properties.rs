//! Property tests for card sets, dealing, play enumeration, and the turn engine.
//!
//! Properties tested:
//! - Union is idempotent, difference with itself is empty, intersection with itself is identity
//! - Dealing partitions the deck into near-equal hands
//! - Every enumerated play can be realized from the hand it was enumerated from
//! - Category-aware enumeration agrees with filtering every play by the beat relation
//! - Bombs beat every non-bomb play
//! - Any table of simple policies plays a game to the end

use std::collections::HashSet;

use killer::{Card, CardSet, Deck, FirstOption, Game, GameOptions, Play, plays};
use proptest::prelude::*;

fn hand() -> impl Strategy<Value = CardSet> {
    prop::collection::vec(0_u8..64, 0..24)
        .prop_map(|indices| indices.into_iter().filter_map(Card::from_index).collect())
}

proptest! {
    /// Property: set algebra laws hold for arbitrary bit vectors
    #[test]
    fn prop_set_algebra(a in any::<u64>(), b in any::<u64>()) {
        let a = CardSet::from(a);
        let b = CardSet::from(b);

        prop_assert_eq!(a.union(b).union(b), a.union(b));
        prop_assert!(a.remove(a).is_empty());
        prop_assert_eq!(a.intersection(a), a);
        prop_assert_eq!(a.len(), a.bits().count_ones() as usize);
        prop_assert_eq!(a.union(b).len() + a.intersection(b).len(), a.len() + b.len());
        prop_assert_eq!(a.naturals().union(a.wilds()), a);
    }

    /// Property: dealing partitions the deck into hands differing by at most one card
    #[test]
    fn prop_deal_partitions_deck(
        cards in any::<u64>(),
        hands in 1_usize..=9,
        seed in any::<u64>(),
    ) {
        let deck = Deck::new(CardSet::from(cards), seed);
        let dealt = deck.deal(hands).unwrap();
        prop_assert_eq!(dealt.len(), hands);

        let mut union = CardSet::EMPTY;
        for hand in &dealt {
            prop_assert!(!union.intersects(*hand), "hands must be disjoint");
            union = union.union(*hand);
        }
        prop_assert_eq!(union, deck.cards());

        let max = dealt.iter().map(|hand| hand.len()).max().unwrap();
        let min = dealt.iter().map(|hand| hand.len()).min().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// Property: every enumerated play selects exactly its size from the hand
    #[test]
    fn prop_enumeration_agrees_with_selection(hand in hand()) {
        for play in plays(hand) {
            let cards = play.select(hand);
            prop_assert!(cards.is_some(), "{} not realizable from {}", play, hand);
            let cards = cards.unwrap();
            prop_assert_eq!(cards.len(), play.size());
            prop_assert!(hand.contains(cards));
        }
    }

    /// Property: enumeration is pure
    #[test]
    fn prop_enumeration_is_repeatable(hand in hand()) {
        prop_assert_eq!(plays(hand), plays(hand));
    }

    /// Property: playable options are exactly the plays that beat the table
    #[test]
    fn prop_playable_matches_beat_filter(table in hand(), hand in hand()) {
        for to_beat in plays(table) {
            let playable: HashSet<Play> = to_beat.playable(hand).into_iter().collect();
            let filtered: HashSet<Play> = plays(hand)
                .into_iter()
                .filter(|candidate| to_beat.yields_to(*candidate))
                .collect();
            prop_assert_eq!(playable, filtered, "options against {}", to_beat);
        }
    }

    /// Property: bombs beat non-bombs and never yield to them
    #[test]
    fn prop_bomb_dominance(hand in hand()) {
        let all = plays(hand);
        for &play in all.iter().filter(|play| !play.is_bomb()) {
            for &bomb in all.iter().filter(|play| play.is_bomb()) {
                prop_assert!(play.yields_to(bomb));
                prop_assert!(!bomb.yields_to(play));
            }
        }
    }

    /// Property: every play yields to itself except the Two of Hearts
    #[test]
    fn prop_equal_plays_beat_each_other(hand in hand()) {
        for play in plays(hand) {
            prop_assert_eq!(play.yields_to(play), play != Play::TwoOfHearts);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: a game always ends with every player ranked and at most one holding cards
    #[test]
    fn prop_game_terminates(
        players in 2_u8..=6,
        wilds in 0_u8..=12,
        seed in any::<u64>(),
    ) {
        let mut game = Game::new(GameOptions::default().with_wilds(wilds), seed);
        for _ in 0..players {
            game.join().unwrap();
        }
        let mut policies = vec![FirstOption; usize::from(players)];
        let result = game.run(&mut policies).unwrap();

        prop_assert_eq!(result.standings.len(), usize::from(players));
        let holders = (0..players)
            .filter(|&player| !game.hand(player).unwrap().is_empty())
            .count();
        prop_assert!(holders <= 1);
        prop_assert_eq!(holders == 1, result.loser.is_some());
    }
}
