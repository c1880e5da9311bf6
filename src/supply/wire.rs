//! JSON bodies of the deck service.

use serde::Deserialize;

use super::DrawResponse;
use crate::card::Card;
use crate::error::SupplyError;

/// Body of a draw response.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawBody {
    /// Service-level success flag.
    pub success: bool,
    /// Deck the cards came from.
    #[serde(default)]
    pub deck_id: String,
    /// Cards left in the deck.
    #[serde(default)]
    pub remaining: usize,
    /// Cards drawn.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl DrawBody {
    /// Checks the success flag and converts the body into a [`DrawResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Unsuccessful`] if the service flagged a failure
    /// and [`SupplyError::Decode`] if a successful body names no deck.
    pub fn into_response(self) -> Result<DrawResponse, SupplyError> {
        if !self.success {
            return Err(SupplyError::Unsuccessful { operation: "draw" });
        }
        if self.deck_id.is_empty() {
            return Err(SupplyError::Decode("draw response without deck_id".to_owned()));
        }
        Ok(DrawResponse {
            cards: self.cards,
            deck_id: self.deck_id,
            remaining: self.remaining,
        })
    }
}

/// Body of a shuffle response.
#[derive(Debug, Clone, Deserialize)]
pub struct ShuffleBody {
    /// Service-level success flag.
    pub success: bool,
    /// Whether the deck was shuffled.
    #[serde(default)]
    pub shuffled: bool,
}

impl ShuffleBody {
    /// Checks both the success and shuffled flags.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Unsuccessful`] unless both flags are set.
    pub const fn check(&self) -> Result<(), SupplyError> {
        if self.success && self.shuffled {
            Ok(())
        } else {
            Err(SupplyError::Unsuccessful {
                operation: "shuffle",
            })
        }
    }
}

/// Body of a return response. Pile details are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnBody {
    /// Service-level success flag.
    pub success: bool,
}

impl ReturnBody {
    /// Checks the success flag.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Unsuccessful`] if the service flagged a failure.
    pub const fn check(&self) -> Result<(), SupplyError> {
        if self.success {
            Ok(())
        } else {
            Err(SupplyError::Unsuccessful { operation: "return" })
        }
    }
}
