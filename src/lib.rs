//! A rules engine for the shedding card game Killer, with optional `no_std`
//! support.
//!
//! Cards live in 64-bit [`CardSet`]s. The [`play`] module enumerates every
//! combination a hand can put down, jokers included, and decides which
//! combination beats which. A [`Game`] deals the [`Deck`] and drives rounds
//! until at most one player is left holding cards, asking a [`Policy`] for
//! each decision.
//!
//! # Example
//!
//! ```
//! use killer::{FirstOption, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_wilds(2), 42);
//! for _ in 0..4 {
//!     game.join().unwrap();
//! }
//! let result = game.run(&mut [FirstOption; 4]).unwrap();
//! assert!(result.loser.is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cards;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod play;
pub mod policy;
pub mod result;
mod sync;

// Re-export main types
pub use card::{
    Card, Joker, MAX_WILDS, NATURAL_COUNT, Natural, Rank, Suit, THREE_OF_CLUBS, TWO_OF_HEARTS,
};
pub use cards::{AsBits, CardSet, Cards, Classified, NaturalSet, WildSet};
pub use deck::Deck;
pub use error::{ActionError, CardsError, DealError, GameError, JoinError, PlayError};
pub use game::{Game, GameState, RoundState};
pub use options::GameOptions;
pub use play::{
    Action, Bomb, Depth, Length, Play, bombs, pairs, plays, quads, runs, runs_of_pairs,
    runs_of_triples, singles, triples,
};
pub use policy::{Context, FirstOption, Opponent, Policy};
pub use result::{GameResult, TurnRecord};
