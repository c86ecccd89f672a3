//! Game engine and state management.

use alloc::vec::Vec;

use crate::card::Rank;
use crate::cards::CardSet;
use crate::deck::Deck;
use crate::error::JoinError;
use crate::options::GameOptions;
use crate::play::{Play, plays};
use crate::policy::{Context, Opponent};

mod deal;
mod driver;
pub mod state;
mod turn;

pub use state::{GameState, RoundState};
use state::Seat;

/// A Killer game engine that manages seating, the deal, and round flow.
///
/// The game owns the deck, every hand, and the pile. Turns are taken one at a
/// time through [`Game::open`] and [`Game::respond`], or handed to a
/// [`crate::Policy`] with [`Game::play_turn`] and [`Game::run`].
#[derive(Debug)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// The deck hands are dealt from.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Seats in turn order.
    seats: Vec<Seat>,
    /// Index into `seats` of the player to act.
    current: usize,
    /// The round in progress.
    round: RoundState,
    /// Every card played this game.
    pile: CardSet,
    /// Players in the order they shed their hands.
    standings: Vec<u8>,
    /// Whether the next opening is the game's first, restricted to Threes.
    first_turn: bool,
    turns: usize,
    rounds: usize,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_wilds(2), 42);
    /// assert_eq!(game.deck().len(), 54);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::with_wilds(options.wilds, seed),
            state: GameState::WaitingForPlayers,
            seats: Vec::new(),
            current: 0,
            round: RoundState::default(),
            pile: CardSet::EMPTY,
            standings: Vec::new(),
            first_turn: false,
            turns: 0,
            rounds: 0,
        }
    }

    /// Joins the game.
    ///
    /// Returns the assigned player ID. IDs are handed out in join order
    /// starting at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt, or every ID is
    /// taken.
    pub fn join(&mut self) -> Result<u8, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let id = u8::try_from(self.seats.len()).map_err(|_| JoinError::TableFull)?;
        self.seats.push(Seat::new(id));
        Ok(id)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the round in progress.
    #[must_use]
    pub const fn round(&self) -> RoundState {
        self.round
    }

    /// Returns the play to beat, if the round has opened.
    #[must_use]
    pub const fn to_beat(&self) -> Option<Play> {
        self.round.to_beat
    }

    /// Returns every card played so far.
    #[must_use]
    pub const fn pile(&self) -> CardSet {
        self.pile
    }

    /// Returns the players who have shed their hands, first out first.
    ///
    /// Once the game is over the last entry is the loser.
    #[must_use]
    pub fn standings(&self) -> &[u8] {
        &self.standings
    }

    /// Returns the player IDs in turn order.
    #[must_use]
    pub fn seating(&self) -> Vec<u8> {
        self.seats.iter().map(|seat| seat.id).collect()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` when nobody is expected to act.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        if !self.state.is_turn() {
            return None;
        }
        self.seats.get(self.current).map(|seat| seat.id)
    }

    /// Returns the player's hand.
    ///
    /// Returns `None` if the player ID is not found.
    #[must_use]
    pub fn hand(&self, player_id: u8) -> Option<CardSet> {
        self.seat(player_id).map(|index| self.seats[index].hand)
    }

    /// Returns whether the player may still act this round.
    ///
    /// Returns `None` if the player ID is not found.
    #[must_use]
    pub fn is_active(&self, player_id: u8) -> Option<bool> {
        self.seat(player_id).map(|index| self.seats[index].active)
    }

    /// Returns the options open to the current player.
    ///
    /// When opening, this is every play in hand, restricted to plays starting
    /// at Three on the game's first turn. When responding, it is every play
    /// that beats the one on the table. Outside a turn it is empty.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<Play> {
        let Some(seat) = self.seats.get(self.current) else {
            return Vec::new();
        };

        match (self.state, self.round.to_beat) {
            (GameState::RoundOpen, _) => {
                let mut options = plays(seat.hand);
                if self.first_turn {
                    options.retain(|play| play.rank() == Rank::Three);
                }
                options
            }
            (GameState::RoundActive, Some(to_beat)) => to_beat.playable(seat.hand),
            _ => Vec::new(),
        }
    }

    /// Returns what the current player can see of the table.
    ///
    /// Returns `None` when nobody is expected to act.
    #[must_use]
    pub fn context(&self) -> Option<Context<'_>> {
        if !self.state.is_turn() {
            return None;
        }
        let seat = self.seats.get(self.current)?;

        let count = self.seats.len();
        let opponents = (1..count)
            .map(|step| &self.seats[(self.current + step) % count])
            .map(|other| Opponent {
                player: other.id,
                active: other.active,
                cards: other.hand.len(),
            })
            .collect();

        Some(Context {
            deck: &self.deck,
            pile: self.pile,
            player: seat.id,
            hand: seat.hand,
            opponents,
        })
    }

    /// Seat index of the player.
    fn seat(&self, player_id: u8) -> Option<usize> {
        self.seats.iter().position(|seat| seat.id == player_id)
    }

    /// Seats holding cards.
    fn holders(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|seat| seat.holds_cards())
    }

    /// First seat after `from`, going around once and ending at `from`
    /// itself, that satisfies `wanted`.
    fn next_seat(&self, from: usize, wanted: impl Fn(&Seat) -> bool) -> Option<usize> {
        let count = self.seats.len();
        (1..=count)
            .map(|step| (from + step) % count)
            .find(|&index| wanted(&self.seats[index]))
    }
}
