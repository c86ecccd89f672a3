//! Choosing the exact cards that realize a play.

use crate::card::{Card, TWO_OF_HEARTS};
use crate::cards::{CardSet, NaturalSet};

use super::Play;

impl Play {
    /// Picks the cards from `hand` that put this play down.
    ///
    /// For each rank of the play the lowest-indexed natural cards are taken,
    /// then jokers (lowest first) cover any shortfall. An ordinary single
    /// whose only natural card is the Two of Hearts is covered by a joker
    /// instead, so the protected card is never spent by accident.
    ///
    /// Returns `None` when the hand cannot realize the play.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::{Card, CardSet, Joker, Play, Rank, Suit};
    ///
    /// let hand: CardSet = [
    ///     Card::from(Rank::Nine.of(Suit::Spades)),
    ///     Card::from(Rank::Nine.of(Suit::Hearts)),
    ///     Card::from(Joker::new(0).unwrap()),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let cards = Play::Triple(Rank::Nine).select(hand).unwrap();
    /// assert_eq!(cards, hand);
    /// assert_eq!(Play::Pair(Rank::Ten).select(hand.naturals().widen()), None);
    /// ```
    #[must_use]
    pub fn select(self, hand: CardSet) -> Option<CardSet> {
        match self {
            Self::TwoOfHearts => hand
                .contains(TWO_OF_HEARTS)
                .then(|| CardSet::from(Card::from(TWO_OF_HEARTS))),
            Self::Single(rank) => {
                let natural = hand.filter_rank(rank).lowest(1);
                if natural.is_empty() || natural.contains(TWO_OF_HEARTS) {
                    let joker = hand.wilds().lowest(1);
                    (!joker.is_empty()).then(|| joker.widen())
                } else {
                    Some(natural.widen())
                }
            }
            Self::Pair(_) | Self::Triple(_) | Self::Run { .. } | Self::Bomb(_) => {
                self.select_window(hand)
            }
        }
    }

    fn select_window(self, hand: CardSet) -> Option<CardSet> {
        let depth = usize::from(self.depth().get());
        let naturals = self.ranks().fold(NaturalSet::EMPTY, |picked, rank| {
            picked | hand.filter_rank(rank).lowest(depth)
        });

        let missing = self.size() - naturals.len();
        let wilds = hand.wilds();
        if missing > wilds.len() {
            return None;
        }

        Some(naturals.union(wilds.lowest(missing)))
    }
}
