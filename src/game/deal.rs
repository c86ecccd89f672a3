use alloc::vec::Vec;

use crate::card::THREE_OF_CLUBS;
use crate::cards::CardSet;
use crate::error::DealError;

use super::{Game, GameState, RoundState};

impl Game {
    /// Deals the deck to every seated player and opens the first round.
    ///
    /// A finished game may be dealt again with the same players.
    ///
    /// # Errors
    ///
    /// Returns an error if no players have joined or a game is in progress.
    ///
    /// # Example
    ///
    /// ```
    /// use killer::{Game, GameOptions, GameState, THREE_OF_CLUBS};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// for _ in 0..4 {
    ///     game.join().unwrap();
    /// }
    /// game.deal().unwrap();
    ///
    /// assert_eq!(game.state(), GameState::RoundOpen);
    /// let opener = game.current_player().unwrap();
    /// assert!(game.hand(opener).unwrap().contains(THREE_OF_CLUBS));
    /// ```
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        let hands = self.deck.deal(self.seats.len())?;
        self.seat_hands(hands);
        Ok(())
    }

    /// Seats predetermined hands and opens the first round.
    ///
    /// `hands[i]` goes to player `i`. The hands need not cover the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no players have joined, a game is in progress,
    /// the number of hands differs from the number of players, or two hands
    /// share a card.
    pub fn deal_hands(&mut self, hands: Vec<CardSet>) -> Result<(), DealError> {
        self.ensure_can_deal()?;

        if hands.len() != self.seats.len() {
            return Err(DealError::HandCountMismatch {
                expected: self.seats.len(),
                actual: hands.len(),
            });
        }

        let mut seen = CardSet::EMPTY;
        for &hand in &hands {
            if seen.intersects(hand) {
                return Err(DealError::OverlappingHands);
            }
            seen |= hand;
        }

        self.seat_hands(hands);
        Ok(())
    }

    fn ensure_can_deal(&self) -> Result<(), DealError> {
        if !matches!(
            self.state,
            GameState::WaitingForPlayers | GameState::GameOver
        ) {
            return Err(DealError::InvalidState);
        }

        if self.seats.is_empty() {
            return Err(DealError::NoPlayers);
        }

        Ok(())
    }

    fn seat_hands(&mut self, hands: Vec<CardSet>) {
        self.seats.sort_unstable_by_key(|seat| seat.id);
        for (seat, hand) in self.seats.iter_mut().zip(hands) {
            seat.hand = hand;
            seat.active = false;
        }
        if self.options.shuffle_seats {
            self.deck.shuffle(&mut self.seats);
        }

        self.current = 0;
        self.round = RoundState::default();
        self.pile = CardSet::EMPTY;
        self.turns = 0;
        self.rounds = 0;
        self.standings.clear();
        // Players dealt nothing are out before the first turn.
        self.standings.extend(
            self.seats
                .iter()
                .filter(|seat| !seat.holds_cards())
                .map(|seat| seat.id),
        );

        log::info!(
            "dealt {} cards to {} players",
            self.seats.iter().map(|seat| seat.hand.len()).sum::<usize>(),
            self.seats.len()
        );

        let three_of_clubs = self
            .options
            .three_of_clubs_leads
            .then(|| {
                self.seats
                    .iter()
                    .position(|seat| seat.hand.contains(THREE_OF_CLUBS))
            })
            .flatten();
        self.first_turn = three_of_clubs.is_some();

        let last = self.seats.len() - 1;
        let opener = three_of_clubs.or_else(|| self.next_seat(last, |seat| seat.holds_cards()));

        match opener {
            Some(opener) if self.holders().count() >= 2 => self.begin_round(opener),
            _ => self.finish(),
        }
    }
}
