//! Game state types.

use crate::cards::CardSet;
use crate::play::Play;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join before the deal.
    WaitingForPlayers,
    /// The current player must open a round.
    RoundOpen,
    /// The current player must beat the play on the table or pass.
    RoundActive,
    /// Nobody is left to beat the leader; call [`super::Game::next_round`].
    RoundOver,
    /// At most one player still holds cards.
    GameOver,
}

impl GameState {
    /// Returns whether a player is expected to act.
    #[must_use]
    pub const fn is_turn(self) -> bool {
        matches!(self, Self::RoundOpen | Self::RoundActive)
    }
}

/// State of the round in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundState {
    /// The play subsequent turns must beat, `None` before the round opens.
    pub to_beat: Option<Play>,
    /// The player who put down [`Self::to_beat`].
    pub leader: Option<u8>,
}

/// One chair at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Seat {
    pub id: u8,
    pub hand: CardSet,
    pub active: bool,
}

impl Seat {
    pub(crate) const fn new(id: u8) -> Self {
        Self {
            id,
            hand: CardSet::EMPTY,
            active: false,
        }
    }

    pub(crate) const fn holds_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}
