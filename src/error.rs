//! Error types for engine operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur when constructing a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Depth outside `1..=4`.
    #[error("invalid depth {0}")]
    InvalidDepth(u8),
    /// Length other than 1 or `3..=13`.
    #[error("invalid length {0}")]
    InvalidLength(u8),
    /// Quads cannot form runs.
    #[error("quads cannot form a run")]
    QuadRun,
    /// The run window reaches past the Ace.
    #[error("run of {length} starting at {rank} overruns the top rank")]
    WindowOverrun {
        /// Starting rank of the window.
        rank: Rank,
        /// Requested length.
        length: u8,
    },
}

/// Errors that can occur when narrowing a raw bit vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardsError {
    /// The vector holds cards the requested kind excludes.
    #[error("bit vector holds cards outside the requested kind")]
    KindMismatch,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Asked to deal zero hands.
    #[error("cannot deal zero hands")]
    NoHands,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Predetermined hands do not match the number of players.
    #[error("expected {expected} hands, got {actual}")]
    HandCountMismatch {
        /// Number of seated players.
        expected: usize,
        /// Number of hands supplied.
        actual: usize,
    },
    /// Predetermined hands share a card.
    #[error("hands share a card")]
    OverlappingHands,
}

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join before the deal.
    #[error("invalid game state for joining")]
    InvalidState,
    /// Every player ID is taken.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The hand cannot realize the chosen play.
    #[error("hand cannot realize the chosen play")]
    Unrealizable,
}

/// Errors that can occur while driving a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A turn failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// No policy was supplied for a seated player.
    #[error("no policy for player {0}")]
    MissingPolicy(u8),
}
