//! Unified SDK error types.

use thiserror::Error;

use crate::shared::ScalingError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Explorer error: {0}")]
    Explorer(#[from] ExplorerError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors (explorer API and token list).
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Node / contract-call errors.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("RPC transport failed: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Invalid node URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Node unavailable: {0}")]
    Unavailable(String),
}

/// Explorer envelope and record errors.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Explorer returned no result for {action}: {message}")]
    EmptyResult { action: String, message: String },

    #[error("Unexpected explorer status '{status}': {message}")]
    UnexpectedStatus { status: String, message: String },

    #[error("Invalid field {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
}

impl ExplorerError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ExplorerError::InvalidField {
            field,
            value: value.into(),
        }
    }
}
