//! HTTP client layer: `W3hHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::W3hHttp;
pub use retry::{RetryConfig, RetryPolicy};

use async_trait::async_trait;
use reqwest::Url;

use crate::error::HttpError;

/// A source of JSON documents fetched by URL.
///
/// [`W3hHttp`] is the production implementation; tests substitute canned
/// responses keyed by URL.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, url: &Url, retry: &RetryPolicy)
        -> Result<serde_json::Value, HttpError>;
}
