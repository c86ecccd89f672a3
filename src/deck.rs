//! Decks and dealing.

use core::fmt;

use alloc::vec;
use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{MAX_WILDS, NATURAL_COUNT};
use crate::cards::{CardSet, NaturalSet, WildSet};
use crate::error::DealError;
use crate::sync::Mutex;

/// The cards in play plus the randomness used to deal them.
///
/// Dealing never changes the deck's cards, only the state of its RNG.
pub struct Deck {
    cards: CardSet,
    rng: Mutex<ChaCha8Rng>,
}

impl Deck {
    /// Creates a deck over an arbitrary card set.
    #[must_use]
    pub fn new(cards: CardSet, seed: u64) -> Self {
        Self {
            cards,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a deck of the 52 natural cards.
    #[must_use]
    pub fn natural(seed: u64) -> Self {
        Self::new(NaturalSet::ALL.widen(), seed)
    }

    /// Creates a deck of the 52 natural cards plus `wilds` jokers.
    ///
    /// `wilds` is clamped to [`MAX_WILDS`].
    ///
    /// # Example
    ///
    /// ```
    /// use killer::Deck;
    ///
    /// let deck = Deck::with_wilds(2, 7);
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.wilds().len(), 2);
    /// ```
    #[must_use]
    pub fn with_wilds(wilds: u8, seed: u64) -> Self {
        let wilds = wilds.min(MAX_WILDS);
        let jokers = ((1_u64 << wilds) - 1) << NATURAL_COUNT;
        Self::new(NaturalSet::ALL.union(jokers), seed)
    }

    /// The cards in play.
    #[must_use]
    pub const fn cards(&self) -> CardSet {
        self.cards
    }

    /// Number of cards in the deck.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The natural cards of the deck.
    #[must_use]
    pub const fn naturals(&self) -> NaturalSet {
        self.cards.naturals()
    }

    /// The jokers of the deck.
    #[must_use]
    pub const fn wilds(&self) -> WildSet {
        self.cards.wilds()
    }

    /// Partitions the deck into `hands` hands.
    ///
    /// The cards are permuted uniformly at random and then dealt round-robin,
    /// so hand sizes differ by at most one.
    ///
    /// # Errors
    ///
    /// Returns an error if `hands` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::Deck;
    ///
    /// let deck = Deck::natural(42);
    /// let hands = deck.deal(4).unwrap();
    /// assert!(hands.iter().all(|hand| hand.len() == 13));
    /// ```
    pub fn deal(&self, hands: usize) -> Result<Vec<CardSet>, DealError> {
        if hands == 0 {
            return Err(DealError::NoHands);
        }

        // Inside-out Fisher-Yates over the set bits only.
        let mut shuffled: Vec<u64> = Vec::with_capacity(self.cards.len());
        {
            let mut rng = self.rng.lock();
            for (i, bit) in self.cards.bit_iter().enumerate() {
                let j = rng.random_range(0..=i);
                if j == i {
                    shuffled.push(bit);
                } else {
                    shuffled.push(shuffled[j]);
                    shuffled[j] = bit;
                }
            }
        }

        let mut dealt = vec![0_u64; hands];
        for (i, bit) in shuffled.into_iter().enumerate() {
            dealt[i % hands] |= bit;
        }

        Ok(dealt.into_iter().map(CardSet::from).collect())
    }

    /// Shuffles `items` with the deck's RNG.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng.lock());
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("cards", &self.cards).finish_non_exhaustive()
    }
}
