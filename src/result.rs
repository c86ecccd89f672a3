//! Turn and game result types.

use alloc::vec::Vec;

use crate::cards::CardSet;
use crate::play::Action;

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    /// The player who acted.
    pub player: u8,
    /// The action taken.
    pub action: Action,
    /// The cards put down (empty for a pass).
    pub cards: CardSet,
    /// Cards left in the player's hand afterwards.
    pub cards_left: usize,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Players in the order they shed their hands; the loser comes last.
    pub standings: Vec<u8>,
    /// The player left holding cards, if any.
    pub loser: Option<u8>,
    /// Number of rounds played.
    pub rounds: usize,
    /// Number of turns taken.
    pub turns: usize,
}
