//! High-level client: `W3hClient` with sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use alloy::primitives::Address;

use crate::config::Config;
use crate::domain::exchange::client::ExchangeReader;
use crate::domain::explorer::client::ExplorerClient;
use crate::domain::token::client::TokenList;
use crate::error::SdkError;

/// Both clients built from one [`Config`].
///
/// `client.exchange()` reads pair state from the node,
/// `client.explorer()` queries the explorer API.
pub struct W3hClient {
    exchange: ExchangeReader,
    explorer: ExplorerClient,
}

impl W3hClient {
    pub fn builder() -> W3hClientBuilder {
        W3hClientBuilder::default()
    }

    pub fn from_config(config: &Config) -> Result<Self, SdkError> {
        Ok(Self {
            exchange: ExchangeReader::from_config(config)?,
            explorer: ExplorerClient::from_config(config)?,
        })
    }

    /// Build from `WEB3_HTTP_URI` / `ETHERSCAN_TOKEN` and friends (`.env` honored).
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_config(&Config::from_env()?)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn exchange(&self) -> &ExchangeReader {
        &self.exchange
    }

    pub fn explorer(&self) -> &ExplorerClient {
        &self.explorer
    }

    pub fn tokens(&self) -> &TokenList {
        self.exchange.tokens()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct W3hClientBuilder {
    config: Config,
}

impl W3hClientBuilder {
    /// Start from an existing configuration instead of the defaults.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn node_url(mut self, url: &str) -> Self {
        self.config.node_url = Some(url.to_string());
        self
    }

    pub fn explorer_api_key(mut self, key: &str) -> Self {
        self.config.explorer_api_key = Some(key.to_string());
        self
    }

    pub fn explorer_url(mut self, url: &str) -> Self {
        self.config.explorer_url = url.to_string();
        self
    }

    pub fn explorer_chain_id(mut self, chain_id: u64) -> Self {
        self.config.explorer_chain_id = Some(chain_id);
        self
    }

    pub fn token_list_url(mut self, url: &str) -> Self {
        self.config.token_list_url = url.to_string();
        self
    }

    pub fn factory(mut self, factory: Address) -> Self {
        self.config.factory = factory;
        self
    }

    pub fn build(self) -> Result<W3hClient, SdkError> {
        W3hClient::from_config(&self.config)
    }
}
