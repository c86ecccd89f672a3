//! The decision boundary between the engine and whoever picks the plays.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Rank;
use crate::cards::CardSet;
use crate::deck::Deck;
use crate::play::{Action, Play};

/// What another player at the table looks like from the acting seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opponent {
    /// The opponent's player ID.
    pub player: u8,
    /// Whether the opponent may still act this round.
    pub active: bool,
    /// Cards left in the opponent's hand.
    pub cards: usize,
}

/// Read-only view handed to a [`Policy`] on its turn.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    /// The deck the game was dealt from.
    pub deck: &'a Deck,
    /// Every card played so far this game.
    pub pile: CardSet,
    /// The acting player's ID.
    pub player: u8,
    /// The acting player's hand.
    pub hand: CardSet,
    /// The other players, in turn order starting after the acting player.
    pub opponents: Vec<Opponent>,
}

/// Chooses plays for one player.
///
/// The engine trusts the returned value to be one of the offered options
/// (or a pass). It only checks that the hand can put the play down, so a
/// policy that invents plays can still beat what it was not offered.
pub trait Policy {
    /// Picks the play that opens a round.
    ///
    /// `options` is never empty for a player holding cards.
    fn open(&mut self, context: &Context<'_>, options: &[Play]) -> Play;

    /// Answers `to_beat` with a pass or one of `options`.
    fn respond(&mut self, context: &Context<'_>, to_beat: Play, options: &[Play]) -> Action;
}

impl<P: Policy + ?Sized> Policy for &mut P {
    fn open(&mut self, context: &Context<'_>, options: &[Play]) -> Play {
        (**self).open(context, options)
    }

    fn respond(&mut self, context: &Context<'_>, to_beat: Play, options: &[Play]) -> Action {
        (**self).respond(context, to_beat, options)
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn open(&mut self, context: &Context<'_>, options: &[Play]) -> Play {
        (**self).open(context, options)
    }

    fn respond(&mut self, context: &Context<'_>, to_beat: Play, options: &[Play]) -> Action {
        (**self).respond(context, to_beat, options)
    }
}

/// Always takes the first option, passing when there is none.
///
/// Opening options come lowest rank first, so this opens with the lowest
/// single in hand.
///
/// # Example
///
/// ```
/// use killer::{Game, GameOptions, FirstOption};
///
/// let mut game = Game::new(GameOptions::default(), 3);
/// for _ in 0..4 {
///     game.join().unwrap();
/// }
/// let result = game.run(&mut [FirstOption; 4]).unwrap();
/// assert_eq!(result.standings.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FirstOption;

impl Policy for FirstOption {
    fn open(&mut self, _context: &Context<'_>, options: &[Play]) -> Play {
        options.first().copied().unwrap_or(Play::Single(Rank::Three))
    }

    fn respond(&mut self, _context: &Context<'_>, _to_beat: Play, options: &[Play]) -> Action {
        options.first().copied().map_or(Action::Pass, Action::Play)
    }
}
