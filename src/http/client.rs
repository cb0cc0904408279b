//! Low-level HTTP client: `W3hHttp`.
//!
//! Issues JSON GET requests with an optional retry policy. Response bodies are
//! returned as raw `serde_json::Value`; envelope handling and conversion to
//! domain types happen in the domain sub-clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::http::JsonTransport;

/// Default request timeout for hosts other than the explorer.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Low-level JSON-over-HTTP client.
#[derive(Debug, Clone)]
pub struct W3hHttp {
    client: Client,
}

impl W3hHttp {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    async fn do_request(&self, url: &Url) -> Result<serde_json::Value, HttpError> {
        let resp = self.client.get(url.clone()).send().await.map_err(classify)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<serde_json::Value>().await.map_err(classify);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[async_trait]
impl JsonTransport for W3hHttp {
    async fn get_json(
        &self,
        url: &Url,
        retry: &RetryPolicy,
    ) -> Result<serde_json::Value, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => re.is_connect() || re.is_request(),
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url.host_str().unwrap_or_default()
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}
