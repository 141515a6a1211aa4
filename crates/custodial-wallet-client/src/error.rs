use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised inside a wallet operation before they are folded into a
/// [`crate::WalletOperationResult`].
#[derive(Debug, Error)]
pub enum WalletClientError {
    /// Malformed `linkedUser` or API key, rejected before any request.
    #[error("{message}")]
    Validation { message: String },

    /// Non-success status from the wallet service.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    /// The request could not be sent or its body could not be read.
    #[error("{message}")]
    Transport { message: String },

    /// Success status, but the body was not the expected JSON.
    #[error("{message}")]
    Decode { message: String },
}

impl WalletClientError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WalletClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wallet_client_base_url_missing")]
    BaseUrlMissing,
    #[error("wallet_client_transport_init_failed:{message}")]
    Transport { message: String },
}
