//! Card supply services.
//!
//! A [`CardSupply`] is the remote deck the engine draws from. It may fail at
//! any call; the engine never retries on its own.

use std::sync::Arc;

use crate::card::Card;
use crate::error::SupplyError;

#[cfg(feature = "http")]
mod http;
mod local;
pub mod wire;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub use http::HttpSupply;
pub use local::LocalSupply;

/// Deck id sentinel asking the service for a brand-new deck.
pub const NEW_DECK: &str = "new";

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResponse {
    /// Cards drawn, in service order.
    pub cards: Vec<Card>,
    /// Deck the cards came from.
    pub deck_id: String,
    /// Cards left in the deck after the draw.
    pub remaining: usize,
}

/// A service that hands out cards from server-side decks.
///
/// Futures are `Send` so a session can live on a multi-threaded runtime.
pub trait CardSupply {
    /// Draws `count` cards. `None` asks for a brand-new deck.
    fn draw(
        &self,
        deck_id: Option<&str>,
        count: usize,
    ) -> impl Future<Output = Result<DrawResponse, SupplyError>> + Send;

    /// Reshuffles an existing deck.
    fn shuffle(&self, deck_id: &str) -> impl Future<Output = Result<(), SupplyError>> + Send;

    /// Puts the given card codes back into an existing deck.
    fn return_cards(
        &self,
        deck_id: &str,
        codes: &[String],
    ) -> impl Future<Output = Result<(), SupplyError>> + Send;
}

impl<S: CardSupply + Send + Sync> CardSupply for Arc<S> {
    fn draw(
        &self,
        deck_id: Option<&str>,
        count: usize,
    ) -> impl Future<Output = Result<DrawResponse, SupplyError>> + Send {
        (**self).draw(deck_id, count)
    }

    fn shuffle(&self, deck_id: &str) -> impl Future<Output = Result<(), SupplyError>> + Send {
        (**self).shuffle(deck_id)
    }

    fn return_cards(
        &self,
        deck_id: &str,
        codes: &[String],
    ) -> impl Future<Output = Result<(), SupplyError>> + Send {
        (**self).return_cards(deck_id, codes)
    }
}
