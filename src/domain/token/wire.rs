//! Wire types for the static token list (Uniswap token-list schema).

use serde::{Deserialize, Serialize};

/// Entries stay untyped here so one malformed entry cannot fail the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenListResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub tokens: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    #[serde(rename = "chainId", default)]
    pub chain_id: Option<u64>,
    pub address: String,
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
}
