//! Which plays a hand can put down.
//!
//! Jokers stand in for any missing card. A hand holding `w` jokers realizes a
//! depth-`d` slot of rank `r` whenever `d - count(r) <= w`, and a run whenever
//! the shortfall summed over its window stays within `w`. All functions are
//! pure; calling them again on the same hand yields the same plays in the same
//! order.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Rank, TWO_OF_HEARTS};
use crate::cards::CardSet;

use super::{Bomb, Depth, Length, Play, fits};

/// Every single the hand can play.
///
/// With a joker in hand every rank is available. The Two of Hearts yields the
/// distinguished [`Play::TwoOfHearts`]; an ordinary Two single is offered only
/// when another Two or a joker can realize it.
#[must_use]
pub fn singles(hand: CardSet) -> Vec<Play> {
    let wild = !hand.wilds().is_empty();
    let mut plays = Vec::new();

    for rank in Rank::ALL {
        let naturals = hand.filter_rank(rank);
        if wild || !naturals.remove(TWO_OF_HEARTS).is_empty() {
            plays.push(Play::Single(rank));
        }
        if naturals.contains(TWO_OF_HEARTS) {
            plays.push(Play::TwoOfHearts);
        }
    }

    plays
}

/// Ranks at which the hand can put down `depth` cards.
fn slots(hand: CardSet, depth: Depth) -> impl Iterator<Item = Rank> {
    let wilds = hand.wilds().len();
    Rank::ALL.into_iter().filter(move |&rank| {
        usize::from(depth.get().saturating_sub(hand.count_rank(rank))) <= wilds
    })
}

/// Every pair the hand can play.
#[must_use]
pub fn pairs(hand: CardSet) -> Vec<Play> {
    slots(hand, Depth::Pair).map(Play::Pair).collect()
}

/// Every triple the hand can play.
#[must_use]
pub fn triples(hand: CardSet) -> Vec<Play> {
    slots(hand, Depth::Triple).map(Play::Triple).collect()
}

/// Every four of a kind the hand can play.
#[must_use]
pub fn quads(hand: CardSet) -> Vec<Play> {
    slots(hand, Depth::Quad)
        .map(|rank| Play::Bomb(Bomb::Quad(rank)))
        .collect()
}

/// Returns whether the hand covers the window, spending jokers on the first
/// shortfalls met and bailing out as soon as the budget runs dry.
fn covers(hand: CardSet, rank: Rank, depth: Depth, length: Length) -> bool {
    if !fits(rank, length) {
        return false;
    }

    let mut budget = hand.wilds().len();
    let start = rank.ordinal();
    for ordinal in start..start + length.get() {
        let Some(rank) = Rank::from_ordinal(ordinal) else {
            return false;
        };
        let missing = usize::from(depth.get().saturating_sub(hand.count_rank(rank)));
        if missing > budget {
            return false;
        }
        budget -= missing;
    }

    true
}

/// Starting ranks of every window of `length` the hand covers at `depth`.
fn windows(hand: CardSet, depth: Depth, length: Length) -> impl Iterator<Item = Rank> {
    Rank::ALL
        .into_iter()
        .filter(move |&rank| covers(hand, rank, depth, length))
}

/// Every run of exactly `length` single cards the hand can play.
///
/// Returns nothing when `length` is not a run length.
#[must_use]
pub fn runs(hand: CardSet, length: Length) -> Vec<Play> {
    if !length.is_run() {
        return Vec::new();
    }
    windows(hand, Depth::Single, length)
        .map(|rank| Play::Run { rank, length })
        .collect()
}

/// Every run of pairs the hand can play, shortest first.
#[must_use]
pub fn runs_of_pairs(hand: CardSet) -> Vec<Play> {
    Length::runs()
        .flat_map(|length| {
            windows(hand, Depth::Pair, length)
                .map(move |rank| Play::from(Bomb::Pairs { rank, length }))
        })
        .collect()
}

/// Every run of triples the hand can play, shortest first.
#[must_use]
pub fn runs_of_triples(hand: CardSet) -> Vec<Play> {
    Length::runs()
        .flat_map(|length| {
            windows(hand, Depth::Triple, length)
                .map(move |rank| Play::from(Bomb::Triples { rank, length }))
        })
        .collect()
}

/// Every bomb the hand can play: runs of pairs, runs of triples, then quads.
#[must_use]
pub fn bombs(hand: CardSet) -> Vec<Play> {
    let mut plays = runs_of_pairs(hand);
    plays.extend(runs_of_triples(hand));
    plays.extend(quads(hand));
    plays
}

/// Every play the hand can put down, ordered by rank, then depth, then length.
///
/// # Example
///
/// ```
/// use killer::{Card, CardSet, Play, Rank, Suit, plays};
///
/// let hand: CardSet = [Rank::Seven.of(Suit::Clubs), Rank::Seven.of(Suit::Hearts)]
///     .into_iter()
///     .map(Card::from)
///     .collect();
/// assert_eq!(plays(hand), vec![Play::Single(Rank::Seven), Play::Pair(Rank::Seven)]);
/// ```
#[must_use]
pub fn plays(hand: CardSet) -> Vec<Play> {
    let mut plays = singles(hand);
    plays.extend(pairs(hand));
    plays.extend(triples(hand));
    for length in Length::runs() {
        plays.extend(runs(hand, length));
    }
    plays.extend(bombs(hand));

    let mut seen = HashSet::with_capacity(plays.len());
    plays.retain(|play| seen.insert(*play));
    plays.sort_by_key(|play| (play.rank(), play.depth(), play.length()));
    plays
}

impl Play {
    /// Every play from `hand` that this play yields to.
    ///
    /// Only the categories that can beat this play are enumerated.
    #[must_use]
    pub fn playable(self, hand: CardSet) -> Vec<Self> {
        let beating = |plays: Vec<Self>| -> Vec<Self> {
            plays
                .into_iter()
                .filter(|candidate| self.yields_to(*candidate))
                .collect()
        };

        match self {
            Self::Single(_) => {
                let mut plays = beating(singles(hand));
                plays.extend(bombs(hand));
                plays
            }
            Self::TwoOfHearts => bombs(hand),
            Self::Pair(_) => {
                let mut plays = beating(pairs(hand));
                plays.extend(bombs(hand));
                plays
            }
            Self::Triple(_) => {
                let mut plays = beating(triples(hand));
                plays.extend(bombs(hand));
                plays
            }
            Self::Run { length, .. } => {
                let mut plays = beating(runs(hand, length));
                plays.extend(bombs(hand));
                plays
            }
            Self::Bomb(Bomb::Pairs { .. }) => beating(bombs(hand)),
            Self::Bomb(Bomb::Triples { .. }) => {
                let mut plays = runs_of_triples(hand);
                plays.extend(quads(hand));
                beating(plays)
            }
            Self::Bomb(Bomb::Quad(_)) => beating(quads(hand)),
        }
    }
}
