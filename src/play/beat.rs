//! Which plays beat which.

use super::{Bomb, Play};

impl Play {
    /// Returns whether `candidate` beats this play.
    ///
    /// Equal plays beat each other: a Seven single yields to another Seven
    /// single. Categories never mix except through bombs, and runs only meet
    /// runs of the same length.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::{Play, Rank};
    ///
    /// assert!(Play::Single(Rank::Five).yields_to(Play::Single(Rank::Five)));
    /// assert!(!Play::Single(Rank::Five).yields_to(Play::Single(Rank::Four)));
    /// assert!(Play::Single(Rank::Three).yields_to(Play::TwoOfHearts));
    /// assert!(!Play::TwoOfHearts.yields_to(Play::Single(Rank::Three)));
    /// ```
    #[must_use]
    #[expect(
        clippy::match_same_arms,
        reason = "one arm per category pair keeps the table exhaustive"
    )]
    pub fn yields_to(self, candidate: Self) -> bool {
        match (self, candidate) {
            (
                Self::Single(_) | Self::TwoOfHearts | Self::Pair(_) | Self::Triple(_) | Self::Run { .. },
                Self::Bomb(_),
            ) => true,
            (Self::Bomb(bomb), Self::Bomb(other)) => bomb.yields_to(other),
            (
                Self::Bomb(_),
                Self::Single(_) | Self::TwoOfHearts | Self::Pair(_) | Self::Triple(_) | Self::Run { .. },
            ) => false,

            (Self::Single(rank), Self::Single(other)) => rank <= other,
            (Self::Single(_), Self::TwoOfHearts) => true,
            (Self::Single(_), Self::Pair(_) | Self::Triple(_) | Self::Run { .. }) => false,

            (
                Self::TwoOfHearts,
                Self::Single(_) | Self::TwoOfHearts | Self::Pair(_) | Self::Triple(_) | Self::Run { .. },
            ) => false,

            (Self::Pair(rank), Self::Pair(other)) => rank <= other,
            (
                Self::Pair(_),
                Self::Single(_) | Self::TwoOfHearts | Self::Triple(_) | Self::Run { .. },
            ) => false,

            (Self::Triple(rank), Self::Triple(other)) => rank <= other,
            (
                Self::Triple(_),
                Self::Single(_) | Self::TwoOfHearts | Self::Pair(_) | Self::Run { .. },
            ) => false,

            (
                Self::Run { rank, length },
                Self::Run {
                    rank: other,
                    length: other_length,
                },
            ) => length == other_length && rank <= other,
            (
                Self::Run { .. },
                Self::Single(_) | Self::TwoOfHearts | Self::Pair(_) | Self::Triple(_),
            ) => false,
        }
    }
}

impl Bomb {
    /// Returns whether `candidate` beats this bomb.
    ///
    /// Quads beat runs of triples, which beat runs of pairs. Within a kind the
    /// longer run wins, then the higher rank; equal bombs beat each other.
    #[must_use]
    #[expect(
        clippy::match_same_arms,
        reason = "one arm per kind pair keeps the table exhaustive"
    )]
    pub fn yields_to(self, candidate: Self) -> bool {
        match (self, candidate) {
            (
                Self::Pairs { rank, length },
                Self::Pairs {
                    rank: other,
                    length: other_length,
                },
            )
            | (
                Self::Triples { rank, length },
                Self::Triples {
                    rank: other,
                    length: other_length,
                },
            ) => (length, rank) <= (other_length, other),
            (Self::Pairs { .. }, Self::Triples { .. } | Self::Quad(_)) => true,
            (Self::Triples { .. }, Self::Pairs { .. }) => false,
            (Self::Triples { .. }, Self::Quad(_)) => true,
            (Self::Quad(_), Self::Pairs { .. } | Self::Triples { .. }) => false,
            (Self::Quad(rank), Self::Quad(other)) => rank <= other,
        }
    }
}
