//! A single-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against an automated
//! dealer: betting, dealing from a multi-deck [`Shoe`], hit/stand/double,
//! dealer play, and settlement into a [`SessionLedger`]. Rendering and input
//! belong to the caller; the library exposes plain data and validators.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.start_round().unwrap();
//!
//! if game.peek().unwrap().is_none() {
//!     game.stand().unwrap();
//!     game.dealer_play().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Resolved);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, ActionParseError, BetError, CardError, DealError, ShowdownError};
pub use game::{
    Action, DEALER_STANDS_ON, Game, GameState, check_bet, determine_winner, valid_bet,
};
pub use hand::{BLACKJACK, DealerHand, Hand};
pub use ledger::{Rating, SessionLedger, Statistics};
pub use options::GameOptions;
pub use result::{Multiplier, Outcome, RoundResult};
pub use shoe::Shoe;
pub use view::TableView;
