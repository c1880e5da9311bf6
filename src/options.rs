//! Card supply configuration.

use core::time::Duration;

use crate::error::ConfigError;

/// Default deck service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

/// Environment variable overriding [`SupplyOptions::base_url`].
pub const ENV_BASE_URL: &str = "BJDECK_API_URL";
/// Environment variable overriding [`SupplyOptions::timeout`], in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BJDECK_TIMEOUT_SECS";
/// Environment variable overriding [`SupplyOptions::seed`].
pub const ENV_SEED: &str = "BJDECK_SEED";

/// Configuration for card supply services.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjdeck::SupplyOptions;
///
/// let options = SupplyOptions::default()
///     .with_base_url("http://localhost:8000/api/deck")
///     .with_timeout(Duration::from_secs(3))
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyOptions {
    /// Base URL of the remote deck service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout for the remote service.
    pub timeout: Duration,
    /// Seed for the in-process deck service.
    pub seed: u64,
}

impl Default for SupplyOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
            seed: 0,
        }
    }
}

impl SupplyOptions {
    /// Sets the base URL of the remote deck service.
    ///
    /// Trailing slashes are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdeck::SupplyOptions;
    ///
    /// let options = SupplyOptions::default().with_base_url("http://localhost/api/deck/");
    /// assert_eq!(options.base_url, "http://localhost/api/deck");
    /// ```
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the seed for the in-process deck service.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds options from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds options from an arbitrary variable lookup, falling back to
    /// defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            options = options.with_base_url(url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_number(ENV_TIMEOUT_SECS, raw)?;
            options = options.with_timeout(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(ENV_SEED) {
            options = options.with_seed(parse_number(ENV_SEED, raw)?);
        }

        Ok(options)
    }
}

fn parse_number(key: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}
