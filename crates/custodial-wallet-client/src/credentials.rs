//! Caller-supplied identities, checked before anything leaves the process.

use std::fmt;

use crate::error::WalletClientError;

pub const LINKED_USER_EMAIL_PREFIX: &str = "email:";
pub const LINKED_USER_ID_PREFIX: &str = "id:";
pub const API_KEY_PREFIX: &str = "sk_";

pub const INVALID_LINKED_USER_MESSAGE: &str =
    "linkedUser must start with 'email:' or 'id:' followed by the identifier";
pub const INVALID_API_KEY_MESSAGE: &str = "Invalid API key format";

/// Owner of a wallet, as `email:<address>` or `id:<identifier>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedUser(String);

impl LinkedUser {
    pub fn parse(raw: &str) -> Result<Self, WalletClientError> {
        let identifier = raw
            .strip_prefix(LINKED_USER_EMAIL_PREFIX)
            .or_else(|| raw.strip_prefix(LINKED_USER_ID_PREFIX));
        match identifier {
            Some(identifier) if !identifier.is_empty() => Ok(Self(raw.to_string())),
            _ => Err(WalletClientError::validation(INVALID_LINKED_USER_MESSAGE)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Secret key sent as `X-API-KEY`. Never rendered by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(raw: &str) -> Result<Self, WalletClientError> {
        if raw.is_empty() || !raw.starts_with(API_KEY_PREFIX) {
            return Err(WalletClientError::validation(INVALID_API_KEY_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wraps a key without checking its shape. Lookups leave that to the
    /// service.
    pub(crate) fn unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
