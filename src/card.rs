//! Card identities: ranks, suits, natural cards and jokers.
//!
//! Every card maps to a unique index in `0..NATURAL_COUNT + MAX_WILDS`. Natural
//! cards occupy `rank * 4 + suit`, jokers follow at `NATURAL_COUNT + ordinal`.
//! The index is the sole identity of a card inside a [`Cards`](crate::cards::Cards)
//! bit vector.

use core::fmt;

/// Number of natural (rank x suit) cards.
pub const NATURAL_COUNT: u8 = 52;

/// Number of distinct jokers that fit beside the naturals in a 64-bit vector.
pub const MAX_WILDS: u8 = 12;

/// Card rank in game order: Three is lowest, Two is highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two.
    Two,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Number of ranks.
    pub const COUNT: u8 = 13;

    /// Returns the rank with the given ordinal (0 = Three).
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < Self::COUNT {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Position of the rank in game order (0 = Three, 12 = Two).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Bit offset of the rank's four-card band.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self.ordinal() * 4
    }

    /// Returns the natural card of this rank in the given suit.
    #[must_use]
    pub const fn of(self, suit: Suit) -> Natural {
        Natural { rank: self, suit }
    }

    /// One-character symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "X",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Diamonds, Self::Hearts];

    /// Position of the suit inside a rank band.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Spades => "♠",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A natural card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Natural {
    /// Creates a natural card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the natural card at `index`, if `index < NATURAL_COUNT`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index >= NATURAL_COUNT {
            return None;
        }
        let Some(rank) = Rank::from_ordinal(index / 4) else {
            return None;
        };
        Some(Self {
            rank,
            suit: Suit::ALL[(index % 4) as usize],
        })
    }

    /// Bit index of the card.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.rank.offset() + self.suit.ordinal()
    }

    /// Single-bit vector of the card.
    #[must_use]
    pub const fn bit(self) -> u64 {
        1 << self.index()
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// One of the interchangeable wild cards.
///
/// Jokers are distinguished only so that a deck can hold several of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Joker(u8);

impl Joker {
    /// Returns the joker with the given ordinal, if `ordinal < MAX_WILDS`.
    #[must_use]
    pub const fn new(ordinal: u8) -> Option<Self> {
        if ordinal < MAX_WILDS {
            Some(Self(ordinal))
        } else {
            None
        }
    }

    /// Returns the joker at bit `index`, if it lies in the wild band.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < NATURAL_COUNT {
            return None;
        }
        Self::new(index - NATURAL_COUNT)
    }

    /// Ordinal of the joker (0-based).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.0
    }

    /// Bit index of the joker.
    #[must_use]
    pub const fn index(self) -> u8 {
        NATURAL_COUNT + self.0
    }

    /// Single-bit vector of the joker.
    #[must_use]
    pub const fn bit(self) -> u64 {
        1 << self.index()
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("jk")
    }
}

/// Any card: natural or wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A rank x suit card.
    Natural(Natural),
    /// A joker.
    Wild(Joker),
}

impl Card {
    /// Returns the card at bit `index`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if let Some(natural) = Natural::from_index(index) {
            Some(Self::Natural(natural))
        } else if let Some(joker) = Joker::from_index(index) {
            Some(Self::Wild(joker))
        } else {
            None
        }
    }

    /// Bit index of the card.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Natural(natural) => natural.index(),
            Self::Wild(joker) => joker.index(),
        }
    }

    /// Single-bit vector of the card.
    #[must_use]
    pub const fn bit(self) -> u64 {
        1 << self.index()
    }

    /// Returns the natural card, if this is one.
    #[must_use]
    pub const fn natural(self) -> Option<Natural> {
        match self {
            Self::Natural(natural) => Some(natural),
            Self::Wild(_) => None,
        }
    }

    /// Returns whether this is a joker.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild(_))
    }
}

impl From<Natural> for Card {
    fn from(natural: Natural) -> Self {
        Self::Natural(natural)
    }
}

impl From<Joker> for Card {
    fn from(joker: Joker) -> Self {
        Self::Wild(joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural(natural) => natural.fmt(f),
            Self::Wild(joker) => joker.fmt(f),
        }
    }
}

/// The protected Two of Hearts.
pub const TWO_OF_HEARTS: Natural = Rank::Two.of(Suit::Hearts);

/// The card whose holder opens the game.
pub const THREE_OF_CLUBS: Natural = Rank::Three.of(Suit::Clubs);
