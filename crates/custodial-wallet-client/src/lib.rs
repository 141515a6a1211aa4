//! Client for a custodial MPC wallet service: create, fetch, and list wallets.
//!
//! Every operation resolves to a [`WalletOperationResult`]. Validation,
//! HTTP, and transport failures all come back as its `Error` variant with a
//! message and a code, so callers branch on the result instead of handling
//! errors.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod result;

pub use client::{API_KEY_HEADER, MPC_WALLET_TYPE, WALLETS_PATH, WalletClient};
pub use config::{BASE_URL_ENV, DEFAULT_BASE_URL, WalletClientConfig};
pub use credentials::{ApiKey, LinkedUser};
pub use error::{ConfigError, WalletClientError};
pub use result::{
    WALLET_CREATION_ERROR, WALLET_FETCH_ERROR, WALLET_LIST_ERROR, WalletHandle, WalletList,
    WalletOperationError, WalletOperationResult, WalletRecord,
};

/// [`WalletClient::create_wallet`] against the default deployment.
pub async fn create_wallet(
    linked_user: &str,
    api_key: &str,
) -> WalletOperationResult<WalletHandle> {
    match default_client() {
        Ok(client) => client.create_wallet(linked_user, api_key).await,
        Err(error) => WalletOperationResult::from_outcome(Err(error), WALLET_CREATION_ERROR),
    }
}

/// [`WalletClient::get_wallet`] against the default deployment.
pub async fn get_wallet(wallet_id: &str, api_key: &str) -> WalletOperationResult<WalletHandle> {
    match default_client() {
        Ok(client) => client.get_wallet(wallet_id, api_key).await,
        Err(error) => WalletOperationResult::from_outcome(Err(error), WALLET_FETCH_ERROR),
    }
}

/// [`WalletClient::list_wallets`] against the default deployment.
pub async fn list_wallets(api_key: &str) -> WalletOperationResult<WalletList> {
    match default_client() {
        Ok(client) => client.list_wallets(api_key).await,
        Err(error) => WalletOperationResult::from_outcome(Err(error), WALLET_LIST_ERROR),
    }
}

fn default_client() -> Result<WalletClient, WalletClientError> {
    WalletClient::new(WalletClientConfig::default()).map_err(|error| {
        WalletClientError::Transport {
            message: error.to_string(),
        }
    })
}
