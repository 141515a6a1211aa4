use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::WalletClientConfig;
use crate::credentials::{ApiKey, LinkedUser};
use crate::error::{ConfigError, WalletClientError};
use crate::result::{
    WALLET_CREATION_ERROR, WALLET_FETCH_ERROR, WALLET_LIST_ERROR, WalletHandle, WalletList,
    WalletOperationResult,
};

pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const MPC_WALLET_TYPE: &str = "solana-mpc-wallet";
pub const WALLETS_PATH: &str = "/wallets";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWalletRequest<'a> {
    #[serde(rename = "type")]
    wallet_type: &'a str,
    linked_user: &'a str,
}

/// Stateless handle on the wallet service. Credentials travel with each call;
/// the client itself only holds the base URL and the HTTP transport.
#[derive(Debug, Clone)]
pub struct WalletClient {
    base_url: String,
    http: reqwest::Client,
}

impl WalletClient {
    pub fn new(config: WalletClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.normalized_base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|error| ConfigError::Transport {
                message: error.to_string(),
            })?;
        Ok(Self { base_url, http })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[must_use]
    pub fn wallet_path(wallet_id: &str) -> String {
        format!("{WALLETS_PATH}/{wallet_id}")
    }

    /// Creates a `solana-mpc-wallet` owned by `linked_user`.
    ///
    /// `linked_user` must look like `email:<address>` or `id:<identifier>` and
    /// `api_key` must start with `sk_`; both are checked before any request.
    pub async fn create_wallet(
        &self,
        linked_user: &str,
        api_key: &str,
    ) -> WalletOperationResult<WalletHandle> {
        let outcome = self.try_create_wallet(linked_user, api_key).await;
        settle("create_wallet", outcome, WALLET_CREATION_ERROR)
    }

    /// Fetches one wallet. The id is passed through as given.
    pub async fn get_wallet(
        &self,
        wallet_id: &str,
        api_key: &str,
    ) -> WalletOperationResult<WalletHandle> {
        let path = Self::wallet_path(wallet_id);
        tracing::debug!(method = "GET", path = %path, "wallet service request");
        let request = self.http.get(self.endpoint(&path));
        let outcome = send_json(request, &ApiKey::unchecked(api_key)).await;
        settle("get_wallet", outcome, WALLET_FETCH_ERROR)
    }

    /// Lists the wallets visible to `api_key`. Only the first page the service
    /// returns is relayed.
    pub async fn list_wallets(&self, api_key: &str) -> WalletOperationResult<WalletList> {
        tracing::debug!(method = "GET", path = WALLETS_PATH, "wallet service request");
        let request = self.http.get(self.endpoint(WALLETS_PATH));
        let outcome = send_json(request, &ApiKey::unchecked(api_key)).await;
        settle("list_wallets", outcome, WALLET_LIST_ERROR)
    }

    async fn try_create_wallet(
        &self,
        linked_user: &str,
        api_key: &str,
    ) -> Result<WalletHandle, WalletClientError> {
        let linked_user = LinkedUser::parse(linked_user)?;
        let api_key = ApiKey::parse(api_key)?;

        tracing::debug!(method = "POST", path = WALLETS_PATH, "wallet service request");
        let request = self
            .http
            .post(self.endpoint(WALLETS_PATH))
            .json(&CreateWalletRequest {
                wallet_type: MPC_WALLET_TYPE,
                linked_user: linked_user.as_str(),
            });
        send_json(request, &api_key).await
    }
}

fn settle<T>(
    operation: &'static str,
    outcome: Result<T, WalletClientError>,
    fallback_code: &str,
) -> WalletOperationResult<T> {
    if let Err(error) = &outcome {
        tracing::warn!(
            operation,
            status = ?error.status(),
            code = fallback_code,
            error = %error,
            "wallet operation failed"
        );
    }
    WalletOperationResult::from_outcome(outcome, fallback_code)
}

async fn send_json<T>(request: RequestBuilder, api_key: &ApiKey) -> Result<T, WalletClientError>
where
    T: DeserializeOwned,
{
    let response = request.header(API_KEY_HEADER, api_key.expose()).send().await?;
    decode_json_response(response).await
}

async fn decode_json_response<T>(response: reqwest::Response) -> Result<T, WalletClientError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(format_http_error(status, &bytes));
    }

    serde_json::from_slice::<T>(&bytes).map_err(|error| WalletClientError::Decode {
        message: error.to_string(),
    })
}

/// Builds the error for a non-success response. The service's `message` is
/// used when the body is JSON and carries one; nothing else from the body is
/// kept.
pub fn format_http_error(status: StatusCode, body: &[u8]) -> WalletClientError {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(
            || format!("HTTP error! status: {}", status.as_u16()),
            str::to_string,
        );

    WalletClientError::Http { status, message }
}
