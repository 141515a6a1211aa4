use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WalletClientError;

pub const WALLET_CREATION_ERROR: &str = "WALLET_CREATION_ERROR";
pub const WALLET_FETCH_ERROR: &str = "WALLET_FETCH_ERROR";
pub const WALLET_LIST_ERROR: &str = "WALLET_LIST_ERROR";

/// Outcome of a single wallet operation.
///
/// Serializes flat with a `status` tag, e.g.
/// `{"status":"success","walletId":"w1","address":"addr1"}` or
/// `{"status":"error","message":"bad request","code":"WALLET_CREATION_ERROR"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WalletOperationResult<T> {
    Success(T),
    Error(WalletOperationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOperationError {
    pub message: String,
    pub code: String,
}

/// `walletId` and `address` of one wallet, passed through as the service
/// sent them. Fields it omitted (or sent as `null`) stay `None` instead of
/// failing the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletHandle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
}

impl WalletHandle {
    #[must_use]
    pub fn wallet_id_str(&self) -> Option<&str> {
        self.wallet_id.as_ref().and_then(Value::as_str)
    }

    #[must_use]
    pub fn address_str(&self) -> Option<&str> {
        self.address.as_ref().and_then(Value::as_str)
    }
}

/// A wallet exactly as listed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletRecord(pub Value);

impl WalletRecord {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[must_use]
    pub fn wallet_id(&self) -> Option<&str> {
        self.get("walletId").and_then(Value::as_str)
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.get("address").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletList {
    #[serde(default)]
    pub wallets: Vec<WalletRecord>,
}

impl<T> WalletOperationResult<T> {
    /// Folds an operation outcome into the caller-facing shape, labelling any
    /// failure with the operation's `fallback_code`.
    pub fn from_outcome(outcome: Result<T, WalletClientError>, fallback_code: &str) -> Self {
        match outcome {
            Ok(payload) => Self::Success(payload),
            Err(error) => Self::Error(WalletOperationError {
                message: error.to_string(),
                code: fallback_code.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&WalletOperationError> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, WalletOperationError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;

    #[test]
    fn success_serializes_flat_with_status_tag() -> Result<(), serde_json::Error> {
        let result = WalletOperationResult::Success(WalletHandle {
            wallet_id: Some(json!("w1")),
            address: Some(json!("addr1")),
        });
        assert_eq!(
            serde_json::to_value(&result)?,
            json!({"status": "success", "walletId": "w1", "address": "addr1"})
        );
        Ok(())
    }

    #[test]
    fn missing_handle_fields_are_omitted() -> Result<(), serde_json::Error> {
        let handle: WalletHandle =
            serde_json::from_value(json!({"walletId": "w1", "address": null}))?;
        assert_eq!(handle.wallet_id_str(), Some("w1"));
        assert_eq!(handle.address, None);
        assert_eq!(
            serde_json::to_value(WalletOperationResult::Success(handle))?,
            json!({"status": "success", "walletId": "w1"})
        );
        Ok(())
    }

    #[test]
    fn handle_passes_non_string_fields_through() -> Result<(), serde_json::Error> {
        let handle: WalletHandle =
            serde_json::from_value(json!({"walletId": 7, "address": {"chain": "solana"}}))?;
        assert_eq!(handle.wallet_id, Some(json!(7)));
        assert_eq!(handle.wallet_id_str(), None);
        assert_eq!(handle.address, Some(json!({"chain": "solana"})));
        assert_eq!(handle.address_str(), None);
        Ok(())
    }

    #[test]
    fn failure_takes_fallback_code() -> Result<(), serde_json::Error> {
        let result = WalletOperationResult::<WalletHandle>::from_outcome(
            Err(WalletClientError::Transport {
                message: "connection refused".to_string(),
            }),
            WALLET_CREATION_ERROR,
        );
        assert_eq!(
            serde_json::to_value(&result)?,
            json!({
                "status": "error",
                "message": "connection refused",
                "code": "WALLET_CREATION_ERROR"
            })
        );
        Ok(())
    }

    #[test]
    fn http_failure_takes_fallback_code() {
        let result = WalletOperationResult::<WalletList>::from_outcome(
            Err(WalletClientError::Http {
                status: StatusCode::FORBIDDEN,
                message: "project disabled".to_string(),
            }),
            WALLET_LIST_ERROR,
        );
        assert_eq!(
            result.error().cloned(),
            Some(WalletOperationError {
                message: "project disabled".to_string(),
                code: "WALLET_LIST_ERROR".to_string(),
            })
        );
    }

    #[test]
    fn listed_records_are_relayed_verbatim() -> Result<(), serde_json::Error> {
        let body = concat!(
            r#"{"wallets":["#,
            r#"{"address":"a","type":"t","walletId":"w1"},"#,
            r#"{"walletId":"w2","address":null},"#,
            r#"{"walletId":7,"address":"addr3","linkedUser":"id:7"}"#,
            r#"]}"#
        );
        let list: WalletList = serde_json::from_str(body)?;
        assert_eq!(list.wallets.len(), 3);
        assert_eq!(list.wallets[0].wallet_id(), Some("w1"));
        assert_eq!(list.wallets[1].address(), None);
        assert_eq!(list.wallets[1].get("address"), Some(&Value::Null));
        assert_eq!(list.wallets[2].wallet_id(), None);
        assert_eq!(list.wallets[2].get("walletId"), Some(&json!(7)));
        assert_eq!(serde_json::to_string(&list)?, body);
        Ok(())
    }
}
