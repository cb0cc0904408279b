//! Wire types for explorer responses. Every numeric field arrives as a string.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, SdkError};

/// `{status, message, result}` wrapper around every explorer response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl Envelope {
    /// `Some(result)` for status `"1"`, `None` for status `"0"` whatever the result holds.
    pub fn into_result<R: DeserializeOwned>(self, action: &str) -> Result<Option<R>, SdkError> {
        match self.status.as_str() {
            "1" => match self.result {
                Some(value) => Ok(Some(serde_json::from_value(value)?)),
                None => Err(ExplorerError::EmptyResult {
                    action: action.to_string(),
                    message: self.message,
                }
                .into()),
            },
            "0" => {
                tracing::debug!(action, message = %self.message, result = ?self.result, "Explorer returned status 0");
                Ok(None)
            }
            _ => Err(ExplorerError::UnexpectedStatus {
                status: self.status,
                message: self.message,
            }
            .into()),
        }
    }

    /// Like [`into_result`](Self::into_result), but a missing result is an
    /// `EmptyResult` error carrying the explorer's own message.
    pub fn into_required<R: DeserializeOwned>(self, action: &str) -> Result<R, SdkError> {
        match self.status.as_str() {
            "0" => {
                // Status-0 results are usually a human-readable reason string.
                let message = match self.result {
                    Some(serde_json::Value::String(reason)) if !reason.is_empty() => {
                        format!("{}: {}", self.message, reason)
                    }
                    _ => self.message,
                };
                Err(ExplorerError::EmptyResult {
                    action: action.to_string(),
                    message,
                }
                .into())
            }
            _ => self.into_result(action)?.ok_or_else(|| {
                SdkError::from(ExplorerError::EmptyResult {
                    action: action.to_string(),
                    message: String::new(),
                })
            }),
        }
    }
}

/// One `account/txlist` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub block_number: String,
    pub time_stamp: String,
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub value: String,
    #[serde(default)]
    pub is_error: String,
    #[serde(default)]
    pub contract_address: String,
}

/// One `account/tokentx` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenTransfer {
    pub block_number: String,
    pub time_stamp: String,
    pub hash: String,
    pub from: String,
    pub to: String,
    pub contract_address: String,
    pub value: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default)]
    pub token_decimal: String,
}

/// One `logs/getLogs` entry. Quantities are hex-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: String,
    pub time_stamp: String,
    #[serde(default)]
    pub log_index: String,
    pub transaction_hash: String,
}

/// `block/getblockcountdown` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlockCountdown {
    #[serde(rename = "CurrentBlock")]
    pub current_block: String,
    #[serde(rename = "CountdownBlock")]
    pub countdown_block: String,
    #[serde(rename = "RemainingBlock")]
    pub remaining_block: String,
    #[serde(rename = "EstimateTimeInSec")]
    pub estimate_time_in_sec: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_one_returns_result() {
        let env = envelope(json!({"status": "1", "message": "OK", "result": ["a", "b"]}));
        let result: Option<Vec<String>> = env.into_result("txlist").unwrap();
        assert_eq!(result, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_status_zero_is_absent_not_error() {
        let env = envelope(json!({"status": "0", "message": "No transactions found", "result": []}));
        let result: Option<Vec<String>> = env.into_result("txlist").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_status_zero_with_string_result() {
        let env = envelope(json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"}));
        let result: Option<Vec<String>> = env.into_result("tokentx").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_status_zero_without_result_key() {
        let env = envelope(json!({"status": "0", "message": "NOTOK"}));
        let result: Option<Vec<String>> = env.into_result("getLogs").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_status_one_without_result_is_error() {
        let env = envelope(json!({"status": "1", "message": "OK"}));
        let err = env.into_result::<Vec<String>>("txlist").unwrap_err();
        assert!(matches!(err, SdkError::Explorer(ExplorerError::EmptyResult { .. })));
    }

    #[test]
    fn test_required_result_keeps_explorer_reason() {
        let env = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Error! Block number already pass"
        }));
        match env.into_required::<serde_json::Value>("getblockcountdown") {
            Err(SdkError::Explorer(ExplorerError::EmptyResult { action, message })) => {
                assert_eq!(action, "getblockcountdown");
                assert_eq!(message, "NOTOK: Error! Block number already pass");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_required_result_present() {
        let env = envelope(json!({"status": "1", "message": "OK", "result": 7}));
        assert_eq!(env.into_required::<u64>("getblockcountdown").unwrap(), 7);
    }

    #[test]
    fn test_unknown_status_is_error() {
        let env = envelope(json!({"status": "2", "message": "?", "result": null}));
        assert!(env.into_result::<serde_json::Value>("txlist").is_err());
    }
}
