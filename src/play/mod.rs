//! The closed set of playable shapes.
//!
//! A [`Play`] is identified by its starting rank, its depth (cards per rank)
//! and its length (consecutive ranks). Which physical cards realize a play is
//! irrelevant to how it ranks; see [`Play::select`] for that.

use core::fmt;

use crate::card::{Natural, Rank, TWO_OF_HEARTS};
use crate::error::PlayError;

mod beat;
pub mod enumerate;
mod select;

pub use enumerate::{
    bombs, pairs, plays, quads, runs, runs_of_pairs, runs_of_triples, singles, triples,
};

/// Number of cards of each rank in a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Depth {
    /// One card per rank.
    Single = 1,
    /// Two cards per rank.
    Pair = 2,
    /// Three cards per rank.
    Triple = 3,
    /// Four cards per rank.
    Quad = 4,
}

impl Depth {
    /// Returns the depth for a card count.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is outside `1..=4`.
    pub const fn new(depth: u8) -> Result<Self, PlayError> {
        match depth {
            1 => Ok(Self::Single),
            2 => Ok(Self::Pair),
            3 => Ok(Self::Triple),
            4 => Ok(Self::Quad),
            _ => Err(PlayError::InvalidDepth(depth)),
        }
    }

    /// Cards per rank.
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

/// Number of consecutive ranks in a play: 1, or 3 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Length(u8);

impl Length {
    /// A play that is not a run.
    pub const ONE: Self = Self(1);
    /// The shortest run.
    pub const THREE: Self = Self(3);

    /// Returns the length for a rank count.
    ///
    /// # Errors
    ///
    /// Returns an error unless `length` is 1 or in `3..=13`.
    pub const fn new(length: u8) -> Result<Self, PlayError> {
        match length {
            1 | 3..=13 => Ok(Self(length)),
            _ => Err(PlayError::InvalidLength(length)),
        }
    }

    /// Number of ranks.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns whether this length forms a run.
    #[must_use]
    pub const fn is_run(self) -> bool {
        self.0 >= 3
    }

    /// Every run length whose window fits below the Two.
    pub fn runs() -> impl Iterator<Item = Self> {
        (3..=MAX_RUN).map(Self)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runs stop at the Ace: the Two never takes part in one.
const MAX_RUN: u8 = Rank::Two.ordinal();

/// Returns whether a window of `length` ranks starting at `rank` stays below the Two.
pub(crate) const fn fits(rank: Rank, length: Length) -> bool {
    !length.is_run() || rank.ordinal() + length.get() <= MAX_RUN
}

/// Plays that beat every non-bomb play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bomb {
    /// A run of pairs.
    Pairs {
        /// Lowest rank of the run.
        rank: Rank,
        /// Number of pairs.
        length: Length,
    },
    /// A run of triples.
    Triples {
        /// Lowest rank of the run.
        rank: Rank,
        /// Number of triples.
        length: Length,
    },
    /// Four of a kind.
    Quad(Rank),
}

/// A playable combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Play {
    /// One card.
    Single(Rank),
    /// The Two of Hearts, which only a bomb beats.
    TwoOfHearts,
    /// Two cards of one rank.
    Pair(Rank),
    /// Three cards of one rank.
    Triple(Rank),
    /// Single cards of consecutive ranks.
    Run {
        /// Lowest rank of the run.
        rank: Rank,
        /// Number of ranks.
        length: Length,
    },
    /// A bomb.
    Bomb(Bomb),
}

impl Play {
    /// Builds the play with the given shape.
    ///
    /// Depth 1 with length 1 is always an ordinary single; use
    /// [`Play::TwoOfHearts`] or [`Play::single`] for the protected card.
    ///
    /// # Errors
    ///
    /// Returns an error for a quad run, or a run window that reaches the Two.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::{Bomb, Depth, Length, Play, Rank};
    ///
    /// let play = Play::new(Rank::Five, Depth::Pair, Length::new(3).unwrap()).unwrap();
    /// assert_eq!(play, Play::Bomb(Bomb::Pairs { rank: Rank::Five, length: Length::THREE }));
    /// assert!(Play::new(Rank::Queen, Depth::Single, Length::THREE).is_ok());
    /// assert!(Play::new(Rank::King, Depth::Single, Length::THREE).is_err());
    /// ```
    pub fn new(rank: Rank, depth: Depth, length: Length) -> Result<Self, PlayError> {
        if depth == Depth::Quad && length.is_run() {
            return Err(PlayError::QuadRun);
        }
        if !fits(rank, length) {
            return Err(PlayError::WindowOverrun {
                rank,
                length: length.get(),
            });
        }

        Ok(match (depth, length.is_run()) {
            (Depth::Single, false) => Self::Single(rank),
            (Depth::Single, true) => Self::Run { rank, length },
            (Depth::Pair, false) => Self::Pair(rank),
            (Depth::Pair, true) => Self::Bomb(Bomb::Pairs { rank, length }),
            (Depth::Triple, false) => Self::Triple(rank),
            (Depth::Triple, true) => Self::Bomb(Bomb::Triples { rank, length }),
            (Depth::Quad, _) => Self::Bomb(Bomb::Quad(rank)),
        })
    }

    /// The play a single natural card represents.
    #[must_use]
    pub fn single(card: Natural) -> Self {
        if card == TWO_OF_HEARTS {
            Self::TwoOfHearts
        } else {
            Self::Single(card.rank)
        }
    }

    /// Lowest rank of the play.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::TwoOfHearts => Rank::Two,
            Self::Single(rank)
            | Self::Pair(rank)
            | Self::Triple(rank)
            | Self::Run { rank, .. }
            | Self::Bomb(Bomb::Pairs { rank, .. } | Bomb::Triples { rank, .. } | Bomb::Quad(rank)) => {
                rank
            }
        }
    }

    /// Cards per rank.
    #[must_use]
    pub const fn depth(self) -> Depth {
        match self {
            Self::Single(_) | Self::TwoOfHearts | Self::Run { .. } => Depth::Single,
            Self::Pair(_) | Self::Bomb(Bomb::Pairs { .. }) => Depth::Pair,
            Self::Triple(_) | Self::Bomb(Bomb::Triples { .. }) => Depth::Triple,
            Self::Bomb(Bomb::Quad(_)) => Depth::Quad,
        }
    }

    /// Consecutive ranks covered.
    #[must_use]
    pub const fn length(self) -> Length {
        match self {
            Self::Run { length, .. }
            | Self::Bomb(Bomb::Pairs { length, .. } | Bomb::Triples { length, .. }) => length,
            Self::Single(_)
            | Self::TwoOfHearts
            | Self::Pair(_)
            | Self::Triple(_)
            | Self::Bomb(Bomb::Quad(_)) => Length::ONE,
        }
    }

    /// Number of cards the play puts down.
    #[must_use]
    pub const fn size(self) -> usize {
        self.depth().get() as usize * self.length().get() as usize
    }

    /// Returns whether the play is a bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb(_))
    }

    /// The ranks the play spans, lowest first.
    pub fn ranks(self) -> impl Iterator<Item = Rank> {
        let start = self.rank().ordinal();
        (start..start + self.length().get()).filter_map(Rank::from_ordinal)
    }
}

impl From<Bomb> for Play {
    fn from(bomb: Bomb) -> Self {
        Self::Bomb(bomb)
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(rank) => write!(f, "SINGLE ({rank})"),
            Self::TwoOfHearts => f.write_str("TWO of HEARTS"),
            Self::Pair(rank) => write!(f, "PAIR ({rank})"),
            Self::Triple(rank) => write!(f, "TRIPLE ({rank})"),
            Self::Run { rank, length } => write!(f, "RUN of {length} ({rank})"),
            Self::Bomb(Bomb::Pairs { rank, length }) => {
                write!(f, "PAIRS BOMB of {length} ({rank})")
            }
            Self::Bomb(Bomb::Triples { rank, length }) => {
                write!(f, "TRIPLES BOMB of {length} ({rank})")
            }
            Self::Bomb(Bomb::Quad(rank)) => write!(f, "QUAD BOMB ({rank})"),
        }
    }
}

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Sit out the rest of the round.
    Pass,
    /// Put down a play.
    Play(Play),
}

impl From<Play> for Action {
    fn from(play: Play) -> Self {
        Self::Play(play)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Play(play) => play.fmt(f),
        }
    }
}
