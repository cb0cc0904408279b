//! Process-wide configuration, read once at startup and injected into each client.

use std::time::Duration;

use alloy::primitives::Address;

use crate::error::SdkError;
use crate::network::{
    DEFAULT_EXPLORER_URL, DEFAULT_TOKEN_LIST_URL, EXPLORER_TIMEOUT_SECS, UNISWAP_V2_FACTORY,
};
use crate::shared::parse_address;

/// Node JSON-RPC endpoint.
pub const ENV_NODE_URL: &str = "WEB3_HTTP_URI";
/// Explorer API key.
pub const ENV_EXPLORER_API_KEY: &str = "ETHERSCAN_TOKEN";
pub const ENV_EXPLORER_URL: &str = "W3H_EXPLORER_URL";
pub const ENV_EXPLORER_CHAIN_ID: &str = "W3H_EXPLORER_CHAIN_ID";
pub const ENV_TOKEN_LIST_URL: &str = "W3H_TOKEN_LIST_URL";
pub const ENV_FACTORY_ADDRESS: &str = "W3H_FACTORY_ADDRESS";

/// Configuration shared by [`ExchangeReader`](crate::domain::exchange::client::ExchangeReader)
/// and [`ExplorerClient`](crate::domain::explorer::client::ExplorerClient).
#[derive(Debug, Clone)]
pub struct Config {
    pub node_url: Option<String>,
    pub explorer_api_key: Option<String>,
    pub explorer_url: String,
    /// Sent as `chainid=` on every explorer query when set (multichain explorer APIs).
    pub explorer_chain_id: Option<u64>,
    pub explorer_timeout: Duration,
    pub token_list_url: String,
    pub factory: Address,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: None,
            explorer_api_key: None,
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            explorer_chain_id: None,
            explorer_timeout: Duration::from_secs(EXPLORER_TIMEOUT_SECS),
            token_list_url: DEFAULT_TOKEN_LIST_URL.to_string(),
            factory: UNISWAP_V2_FACTORY,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, SdkError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset optional keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            node_url: lookup(ENV_NODE_URL),
            explorer_api_key: lookup(ENV_EXPLORER_API_KEY),
            ..Config::default()
        };

        if let Some(url) = lookup(ENV_EXPLORER_URL) {
            config.explorer_url = url;
        }
        if let Some(raw) = lookup(ENV_EXPLORER_CHAIN_ID) {
            let chain_id = raw.trim().parse::<u64>().map_err(|e| {
                SdkError::Config(format!("{} must be an integer, got '{}': {}", ENV_EXPLORER_CHAIN_ID, raw, e))
            })?;
            config.explorer_chain_id = Some(chain_id);
        }
        if let Some(url) = lookup(ENV_TOKEN_LIST_URL) {
            config.token_list_url = url;
        }
        if let Some(raw) = lookup(ENV_FACTORY_ADDRESS) {
            config.factory = parse_address(&raw)
                .map_err(|e| SdkError::Config(format!("{}: {}", ENV_FACTORY_ADDRESS, e)))?;
        }

        Ok(config)
    }

    pub fn require_node_url(&self) -> Result<&str, SdkError> {
        self.node_url
            .as_deref()
            .ok_or_else(|| SdkError::Config(format!("{} is not set", ENV_NODE_URL)))
    }

    pub fn require_explorer_api_key(&self) -> Result<&str, SdkError> {
        self.explorer_api_key
            .as_deref()
            .ok_or_else(|| SdkError::Config(format!("{} is not set", ENV_EXPLORER_API_KEY)))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
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

    pub fn explorer_timeout(mut self, timeout: Duration) -> Self {
        self.config.explorer_timeout = timeout;
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

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.node_url.is_none());
        assert_eq!(config.explorer_url, DEFAULT_EXPLORER_URL);
        assert_eq!(config.explorer_timeout, Duration::from_secs(3));
        assert_eq!(config.factory, UNISWAP_V2_FACTORY);
        assert!(config.require_node_url().is_err());
        assert!(config.require_explorer_api_key().is_err());
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_NODE_URL, "http://localhost:8545"),
            (ENV_EXPLORER_API_KEY, "KEY"),
            (ENV_EXPLORER_URL, "https://api-sepolia.etherscan.io/api"),
            (ENV_EXPLORER_CHAIN_ID, "11155111"),
            (ENV_FACTORY_ADDRESS, "0x7E0987E5b3a30e3f2828572Bb659A548460a3003"),
        ]))
        .unwrap();
        assert_eq!(config.require_node_url().unwrap(), "http://localhost:8545");
        assert_eq!(config.require_explorer_api_key().unwrap(), "KEY");
        assert_eq!(config.explorer_chain_id, Some(11155111));
        assert_eq!(
            config.factory,
            "0x7e0987e5b3a30e3f2828572bb659a548460a3003".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_from_lookup_rejects_bad_factory() {
        let err = Config::from_lookup(lookup_from(&[(ENV_FACTORY_ADDRESS, "0x1234")])).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .node_url("http://node")
            .explorer_api_key("k")
            .explorer_timeout(Duration::from_secs(10))
            .build();
        assert_eq!(config.node_url.as_deref(), Some("http://node"));
        assert_eq!(config.explorer_timeout, Duration::from_secs(10));
        assert_eq!(config.token_list_url, DEFAULT_TOKEN_LIST_URL);
    }
}
