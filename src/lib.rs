//! A blackjack scoring engine driven by a remote, finite card deck.
//!
//! The crate provides a [`Game`] session that deals from a [`CardSupply`]
//! (a remote deck service or the in-process [`LocalSupply`]), keeps the
//! remote deck from running dry by reshuffling it mid-round, and scores
//! hands with ace adjustment.
//!
//! # Example
//!
//! ```no_run
//! use bjdeck::{Game, LocalSupply, SupplyOptions};
//!
//! let options = SupplyOptions::default().with_seed(42);
//! let game = Game::new(LocalSupply::from_options(&options));
//! let _ = game;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
pub mod supply;
mod sync;

// Re-export main types
pub use card::{Card, CardImages, DECK_SIZE, Rank, Suit};
pub use deck::{Acquired, DeckHandle};
pub use error::{ConfigError, GameError, SupplyError};
pub use game::{Action, Game, GameHandle, GameState, Phase};
pub use hand::Hand;
pub use options::SupplyOptions;
pub use result::Winner;
#[cfg(feature = "http")]
pub use supply::HttpSupply;
pub use supply::{CardSupply, DrawResponse, LocalSupply};
