//! REST client for a deckofcardsapi-compatible service.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{DrawBody, ReturnBody, ShuffleBody};
use super::{CardSupply, DrawResponse, NEW_DECK};
use crate::error::SupplyError;
use crate::options::SupplyOptions;

/// Card supply backed by the remote deck service.
#[derive(Debug, Clone)]
pub struct HttpSupply {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSupply {
    /// Creates a client for the service at `options.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Transport`] if the HTTP client cannot be built.
    pub fn new(options: &SupplyOptions) -> Result<Self, SupplyError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|err| SupplyError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: options.base_url.clone(),
        })
    }

    /// Returns the service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: String,
    ) -> Result<T, SupplyError> {
        debug!(operation, %url, "deck service request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| SupplyError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SupplyError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| SupplyError::Decode(err.to_string()))
    }
}

impl CardSupply for HttpSupply {
    async fn draw(&self, deck_id: Option<&str>, count: usize) -> Result<DrawResponse, SupplyError> {
        let deck = deck_id.unwrap_or(NEW_DECK);
        let url = format!("{}/{deck}/draw/?count={count}", self.base_url);
        self.get::<DrawBody>("draw", url).await?.into_response()
    }

    async fn shuffle(&self, deck_id: &str) -> Result<(), SupplyError> {
        let url = format!("{}/{deck_id}/shuffle/", self.base_url);
        self.get::<ShuffleBody>("shuffle", url).await?.check()
    }

    async fn return_cards(&self, deck_id: &str, codes: &[String]) -> Result<(), SupplyError> {
        let url = format!(
            "{}/{deck_id}/return/?cards={}",
            self.base_url,
            codes.join(",")
        );
        self.get::<ReturnBody>("return", url).await?.check()
    }
}
