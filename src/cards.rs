//! Immutable bit-vector card sets.
//!
//! A [`Cards`] value is a single `u64` where bit `i` is set when the card with
//! index `i` is in the set. The kind parameter restricts which bits may be set:
//! [`NaturalOnly`] sets never hold jokers, [`WildOnly`] sets never hold natural
//! cards, and [`Mixed`] sets hold anything. Every operation returns a new set.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, BitOrAssign, Sub};

use crate::card::{Card, Joker, NATURAL_COUNT, Natural, Rank, Suit};
use crate::error::CardsError;

/// The four cards of the lowest rank.
const RANK_BAND: u64 = 0xF;
/// One bit per rank, in the clubs position.
const SUIT_BAND: u64 = 0x0001_1111_1111_1111;
const NATURAL_MASK: u64 = (1 << NATURAL_COUNT) - 1;

mod sealed {
    pub trait Sealed {}
}

/// Restriction on which card indices a [`Cards`] value may hold.
pub trait Kind: sealed::Sealed + Copy + fmt::Debug {
    /// The card type yielded when iterating.
    type Item: Copy;
    /// Bits this kind may hold.
    const MASK: u64;
    /// Converts a bit index inside [`Self::MASK`] into a card.
    fn item(index: u8) -> Option<Self::Item>;
}

/// Marker for sets holding any card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mixed;

/// Marker for sets holding natural cards only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOnly;

/// Marker for sets holding jokers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WildOnly;

impl sealed::Sealed for Mixed {}
impl sealed::Sealed for NaturalOnly {}
impl sealed::Sealed for WildOnly {}

impl Kind for Mixed {
    type Item = Card;
    const MASK: u64 = u64::MAX;

    fn item(index: u8) -> Option<Card> {
        Card::from_index(index)
    }
}

impl Kind for NaturalOnly {
    type Item = Natural;
    const MASK: u64 = NATURAL_MASK;

    fn item(index: u8) -> Option<Natural> {
        Natural::from_index(index)
    }
}

impl Kind for WildOnly {
    type Item = Joker;
    const MASK: u64 = !NATURAL_MASK;

    fn item(index: u8) -> Option<Joker> {
        Joker::from_index(index)
    }
}

/// Anything that can be viewed as a raw card bit vector.
pub trait AsBits {
    /// Returns the bit vector.
    fn as_bits(&self) -> u64;
}

impl AsBits for u64 {
    fn as_bits(&self) -> u64 {
        *self
    }
}

impl AsBits for Card {
    fn as_bits(&self) -> u64 {
        self.bit()
    }
}

impl AsBits for Natural {
    fn as_bits(&self) -> u64 {
        self.bit()
    }
}

impl AsBits for Joker {
    fn as_bits(&self) -> u64 {
        self.bit()
    }
}

impl<K: Kind> AsBits for Cards<K> {
    fn as_bits(&self) -> u64 {
        self.bits
    }
}

/// An immutable set of cards.
#[derive(Clone, Copy)]
pub struct Cards<K: Kind = Mixed> {
    bits: u64,
    kind: PhantomData<K>,
}

/// A set that may hold any card.
pub type CardSet = Cards<Mixed>;
/// A set of natural cards.
pub type NaturalSet = Cards<NaturalOnly>;
/// A set of jokers.
pub type WildSet = Cards<WildOnly>;

impl<K: Kind> Cards<K> {
    /// The empty set.
    pub const EMPTY: Self = Self::raw(0);

    /// Every card this kind may hold.
    pub const ALL: Self = Self::raw(K::MASK);

    const fn raw(bits: u64) -> Self {
        Self {
            bits: bits & K::MASK,
            kind: PhantomData,
        }
    }

    /// Returns the empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns the underlying bit vector.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Number of cards in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns whether every card of `other` is in this set.
    #[must_use]
    pub fn contains(self, other: impl AsBits) -> bool {
        let other = other.as_bits();
        self.bits & other == other
    }

    /// Returns whether this set shares at least one card with `other`.
    #[must_use]
    pub fn intersects(self, other: impl AsBits) -> bool {
        self.bits & other.as_bits() != 0
    }

    /// Returns the union with `other`.
    #[must_use]
    pub fn union(self, other: impl AsBits) -> CardSet {
        CardSet::raw(self.bits | other.as_bits())
    }

    /// Returns this set without the cards of `other`.
    #[must_use]
    pub fn remove(self, other: impl AsBits) -> Self {
        Self::raw(self.bits & !other.as_bits())
    }

    /// Returns the cards common to this set and `other`.
    #[must_use]
    pub fn intersection(self, other: impl AsBits) -> Self {
        Self::raw(self.bits & other.as_bits())
    }

    /// The natural cards of this set.
    #[must_use]
    pub const fn naturals(self) -> NaturalSet {
        NaturalSet::raw(self.bits)
    }

    /// The jokers of this set.
    #[must_use]
    pub const fn wilds(self) -> WildSet {
        WildSet::raw(self.bits)
    }

    /// The cards of one rank.
    #[must_use]
    pub const fn filter_rank(self, rank: Rank) -> NaturalSet {
        NaturalSet::raw(self.bits & (RANK_BAND << rank.offset()))
    }

    /// The cards of one suit.
    #[must_use]
    pub const fn filter_suit(self, suit: Suit) -> NaturalSet {
        NaturalSet::raw(self.bits & (SUIT_BAND << suit.ordinal()))
    }

    /// Number of cards of one rank.
    #[must_use]
    pub const fn count_rank(self, rank: Rank) -> u8 {
        self.filter_rank(rank).len() as u8
    }

    /// Number of cards of one suit.
    #[must_use]
    pub const fn count_suit(self, suit: Suit) -> u8 {
        self.filter_suit(suit).len() as u8
    }

    /// The `n` lowest-indexed cards of the set.
    #[must_use]
    pub fn lowest(self, n: usize) -> Self {
        Self::raw(self.bit_iter().take(n).fold(0, |acc, bit| acc | bit))
    }

    /// Iterates over the cards, lowest index first.
    #[must_use]
    pub const fn iter(self) -> Iter<K> {
        Iter {
            bits: self.bits,
            kind: PhantomData,
        }
    }

    /// Iterates over single-bit vectors of the cards, lowest index first.
    #[must_use]
    pub const fn bit_iter(self) -> BitIter {
        BitIter(self.bits)
    }

    /// Forgets the kind restriction.
    #[must_use]
    pub const fn widen(self) -> CardSet {
        CardSet::raw(self.bits)
    }
}

impl CardSet {
    /// Returns the most specific view of this set.
    ///
    /// The empty set classifies as [`Classified::Mixed`].
    #[must_use]
    pub const fn classify(self) -> Classified {
        if self.bits == 0 {
            Classified::Mixed(self)
        } else if self.bits & NATURAL_MASK == self.bits {
            Classified::Natural(NaturalSet::raw(self.bits))
        } else if self.bits & !NATURAL_MASK == self.bits {
            Classified::Wild(WildSet::raw(self.bits))
        } else {
            Classified::Mixed(self)
        }
    }
}

/// A card set resolved to its most specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified {
    /// Natural cards only.
    Natural(NaturalSet),
    /// Jokers only.
    Wild(WildSet),
    /// Both, or the empty set.
    Mixed(CardSet),
}

impl From<u64> for Classified {
    fn from(bits: u64) -> Self {
        CardSet::from(bits).classify()
    }
}

impl From<u64> for CardSet {
    fn from(bits: u64) -> Self {
        Self::raw(bits)
    }
}

impl TryFrom<u64> for NaturalSet {
    type Error = CardsError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        if bits & !NaturalOnly::MASK != 0 {
            return Err(CardsError::KindMismatch);
        }
        Ok(Self::raw(bits))
    }
}

impl TryFrom<u64> for WildSet {
    type Error = CardsError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        if bits & !WildOnly::MASK != 0 {
            return Err(CardsError::KindMismatch);
        }
        Ok(Self::raw(bits))
    }
}

impl From<NaturalSet> for CardSet {
    fn from(cards: NaturalSet) -> Self {
        cards.widen()
    }
}

impl From<WildSet> for CardSet {
    fn from(cards: WildSet) -> Self {
        cards.widen()
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self::raw(card.bit())
    }
}

impl From<Natural> for NaturalSet {
    fn from(card: Natural) -> Self {
        Self::raw(card.bit())
    }
}

impl From<Joker> for WildSet {
    fn from(joker: Joker) -> Self {
        Self::raw(joker.bit())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::raw(iter.into_iter().fold(0, |acc, card| acc | card.bit()))
    }
}

impl FromIterator<Natural> for NaturalSet {
    fn from_iter<I: IntoIterator<Item = Natural>>(iter: I) -> Self {
        Self::raw(iter.into_iter().fold(0, |acc, card| acc | card.bit()))
    }
}

impl FromIterator<Joker> for WildSet {
    fn from_iter<I: IntoIterator<Item = Joker>>(iter: I) -> Self {
        Self::raw(iter.into_iter().fold(0, |acc, joker| acc | joker.bit()))
    }
}

impl<K: Kind> BitOr for Cards<K> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::raw(self.bits | rhs.bits)
    }
}

impl<K: Kind> BitOrAssign for Cards<K> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<K: Kind> BitAnd for Cards<K> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::raw(self.bits & rhs.bits)
    }
}

impl<K: Kind> Sub for Cards<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::raw(self.bits & !rhs.bits)
    }
}

impl<K: Kind, J: Kind> PartialEq<Cards<J>> for Cards<K> {
    fn eq(&self, other: &Cards<J>) -> bool {
        self.bits == other.bits
    }
}

impl<K: Kind> Eq for Cards<K> {}

impl<K: Kind> Hash for Cards<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<K: Kind> Default for Cards<K> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<K: Kind> fmt::Debug for Cards<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cards({:#018x})", self.bits)
    }
}

impl<K: Kind> fmt::Display for Cards<K>
where
    K::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<K: Kind> IntoIterator for Cards<K> {
    type Item = K::Item;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Iter<K> {
        self.iter()
    }
}

/// Iterator over the cards of a set, lowest index first.
///
/// Iterating never consumes the set; call [`Cards::iter`] again to restart.
#[derive(Debug, Clone)]
pub struct Iter<K: Kind> {
    bits: u64,
    kind: PhantomData<K>,
}

impl<K: Kind> Iterator for Iter<K> {
    type Item = K::Item;

    fn next(&mut self) -> Option<K::Item> {
        while self.bits != 0 {
            let index = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1;
            if let Some(item) = K::item(index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl<K: Kind> ExactSizeIterator for Iter<K> {}
impl<K: Kind> FusedIterator for Iter<K> {}

/// Iterator over single-bit vectors, lowest bit first.
#[derive(Debug, Clone)]
pub struct BitIter(u64);

impl Iterator for BitIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0 & self.0.wrapping_neg();
        self.0 ^= bit;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}
impl FusedIterator for BitIter {}
