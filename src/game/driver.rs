use crate::error::{ActionError, GameError};
use crate::play::{Action, Play};
use crate::policy::Policy;
use crate::result::{GameResult, TurnRecord};

use super::{Game, GameState};

enum Decision {
    Open(Play),
    Respond(Action),
}

impl Game {
    /// Asks `policy` for the current player's action and applies it.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is expected to act, or the policy picks a
    /// play the hand cannot put down.
    pub fn play_turn<P: Policy + ?Sized>(
        &mut self,
        policy: &mut P,
    ) -> Result<TurnRecord, ActionError> {
        let (player, decision) = {
            let context = self.context().ok_or(ActionError::InvalidState)?;
            let options = self.legal_plays();
            let decision = match self.round.to_beat {
                None => Decision::Open(policy.open(&context, &options)),
                Some(to_beat) => Decision::Respond(policy.respond(&context, to_beat, &options)),
            };
            (context.player, decision)
        };

        match decision {
            Decision::Open(play) => self.open(player, play),
            Decision::Respond(action) => self.respond(player, action),
        }
    }

    /// Plays the game to the end.
    ///
    /// `policies[i]` acts for player `i`. Deals first if the cards are not
    /// out yet.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing fails, a player has no policy, or a policy
    /// picks a play its hand cannot put down.
    pub fn run<P: Policy>(&mut self, policies: &mut [P]) -> Result<GameResult, GameError> {
        loop {
            match self.state {
                GameState::WaitingForPlayers => self.deal()?,
                GameState::RoundOpen | GameState::RoundActive => {
                    let player = self.seats[self.current].id;
                    let policy = policies
                        .get_mut(usize::from(player))
                        .ok_or(GameError::MissingPolicy(player))?;
                    self.play_turn(policy)?;
                }
                GameState::RoundOver => self.next_round()?,
                GameState::GameOver => return Ok(self.summary()),
            }
        }
    }

    /// Returns the result of a finished game.
    ///
    /// Returns `None` while the game is still going.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.state == GameState::GameOver).then(|| self.summary())
    }

    fn summary(&self) -> GameResult {
        let loser = self.holders().next().map(|seat| seat.id);

        GameResult {
            standings: self.standings.clone(),
            loser,
            rounds: self.rounds,
            turns: self.turns,
        }
    }
}
