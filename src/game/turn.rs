use alloc::vec::Vec;

use crate::cards::CardSet;
use crate::error::ActionError;
use crate::play::{Action, Play};
use crate::result::TurnRecord;

use super::{Game, GameState, RoundState};

impl Game {
    fn ensure_player_turn(&self, player_id: u8, state: GameState) -> Result<usize, ActionError> {
        if self.state != state {
            return Err(ActionError::InvalidState);
        }

        let index = self.seat(player_id).ok_or(ActionError::PlayerNotFound)?;
        if index != self.current {
            return Err(ActionError::NotYourTurn);
        }

        Ok(index)
    }

    /// Opens the round with `play`.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting to be opened, it is not the
    /// player's turn, the player cannot be found, or the hand cannot put the
    /// play down. Nothing changes on error.
    pub fn open(&mut self, player_id: u8, play: Play) -> Result<TurnRecord, ActionError> {
        let index = self.ensure_player_turn(player_id, GameState::RoundOpen)?;
        self.put_down(index, play)
    }

    /// Answers the play on the table with `action`.
    ///
    /// The action is not checked against [`Game::legal_plays`]; only whether
    /// the hand holds the cards.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, it is not the player's
    /// turn, the player cannot be found, or the hand cannot put the play
    /// down. Nothing changes on error.
    pub fn respond(&mut self, player_id: u8, action: Action) -> Result<TurnRecord, ActionError> {
        let index = self.ensure_player_turn(player_id, GameState::RoundActive)?;
        match action {
            Action::Pass => Ok(self.pass(index)),
            Action::Play(play) => self.put_down(index, play),
        }
    }

    /// Opens the next round once the last one is over.
    ///
    /// The leader of the finished round opens; if they shed their hand with
    /// that play, the next player still holding cards opens instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn next_round(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let leader = self
            .round
            .leader
            .and_then(|id| self.seat(id))
            .unwrap_or(self.current);
        let opener = if self.seats[leader].holds_cards() {
            Some(leader)
        } else {
            self.next_seat(leader, |seat| seat.holds_cards())
        };

        match opener {
            Some(opener) => self.begin_round(opener),
            None => self.finish(),
        }
        Ok(())
    }

    pub(super) fn begin_round(&mut self, opener: usize) {
        for seat in &mut self.seats {
            seat.active = seat.holds_cards();
        }
        self.round = RoundState::default();
        self.current = opener;
        self.rounds += 1;
        self.state = GameState::RoundOpen;

        log::info!(
            "round {} opened by player {}",
            self.rounds,
            self.seats[opener].id
        );
    }

    pub(super) fn finish(&mut self) {
        let remaining: Vec<u8> = self
            .holders()
            .map(|seat| seat.id)
            .filter(|id| !self.standings.contains(id))
            .collect();
        self.standings.extend(remaining);
        for seat in &mut self.seats {
            seat.active = false;
        }
        self.state = GameState::GameOver;

        log::info!("game over, standings {:?}", self.standings);
    }

    fn put_down(&mut self, index: usize, play: Play) -> Result<TurnRecord, ActionError> {
        let seat = &mut self.seats[index];
        let cards = play.select(seat.hand).ok_or(ActionError::Unrealizable)?;

        seat.hand = seat.hand.remove(cards);
        let id = seat.id;
        let cards_left = seat.hand.len();
        if cards_left == 0 {
            seat.active = false;
            self.standings.push(id);
        }

        self.pile |= cards;
        self.round = RoundState {
            to_beat: Some(play),
            leader: Some(id),
        };
        self.first_turn = false;

        Ok(self.record(id, Action::Play(play), cards, cards_left))
    }

    fn pass(&mut self, index: usize) -> TurnRecord {
        let seat = &mut self.seats[index];
        seat.active = false;
        let (id, cards_left) = (seat.id, seat.hand.len());
        self.record(id, Action::Pass, CardSet::EMPTY, cards_left)
    }

    fn record(
        &mut self,
        player: u8,
        action: Action,
        cards: CardSet,
        cards_left: usize,
    ) -> TurnRecord {
        self.turns += 1;
        log::debug!("player {player} ---- {action} ({cards_left})");
        self.advance();

        TurnRecord {
            player,
            action,
            cards,
            cards_left,
        }
    }

    /// Moves the turn on after an action.
    ///
    /// The round is over once the turn would come back to the leader or
    /// nobody is left to act; the game is over once fewer than two players
    /// hold cards.
    fn advance(&mut self) {
        if self.holders().count() < 2 {
            self.finish();
            return;
        }

        let leader = self.round.leader;
        match self.next_seat(self.current, |seat| seat.active) {
            Some(next) if Some(self.seats[next].id) != leader => {
                self.current = next;
                self.state = GameState::RoundActive;
            }
            _ => {
                log::trace!("round {} over", self.rounds);
                self.state = GameState::RoundOver;
            }
        }
    }
}
