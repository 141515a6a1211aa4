use std::env;

use crate::error::ConfigError;

/// Deployment every client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://staging.crossmint.com/api/v1-alpha2";

/// Opt-in override read by [`WalletClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "CUSTODIAL_WALLET_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletClientConfig {
    pub base_url: String,
}

impl Default for WalletClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WalletClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Uses `CUSTODIAL_WALLET_API_BASE_URL` when it is set and non-blank,
    /// the default deployment otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(env::var(BASE_URL_ENV).ok())
    }

    #[must_use]
    pub fn from_override(base_url: Option<String>) -> Self {
        match base_url.filter(|value| !value.trim().is_empty()) {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }

    pub(crate) fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::BaseUrlMissing);
        }
        Ok(trimmed.trim_end_matches('/').to_string())
    }
}
