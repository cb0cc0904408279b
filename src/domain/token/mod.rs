//! Token domain: symbol/address/decimals metadata from a static token list.

pub mod client;
pub mod wire;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::parse_address;

pub use client::TokenList;

/// Token metadata from the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub chain_id: Option<u64>,
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TryFrom<wire::TokenEntry> for TokenInfo {
    type Error = SdkError;

    fn try_from(entry: wire::TokenEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            chain_id: entry.chain_id,
            address: parse_address(&entry.address).map_err(SdkError::Validation)?,
            name: entry.name,
            symbol: entry.symbol,
            decimals: entry.decimals,
        })
    }
}

/// What a lookup identifier refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenQuery {
    /// Matched case-insensitively against `symbol`.
    Symbol(String),
    /// Matched exactly against `address`.
    Address(Address),
}

impl TokenQuery {
    /// Valid `0x` addresses are addresses; anything else, `0xBTC` included,
    /// is a symbol.
    pub fn parse(identifier: &str) -> Result<Self, SdkError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SdkError::Validation("empty token identifier".to_string()));
        }
        Ok(parse_address(identifier)
            .map(TokenQuery::Address)
            .unwrap_or_else(|_| TokenQuery::Symbol(identifier.to_string())))
    }

    pub fn matches(&self, token: &TokenInfo) -> bool {
        match self {
            TokenQuery::Symbol(symbol) => token.symbol.eq_ignore_ascii_case(symbol),
            TokenQuery::Address(address) => token.address == *address,
        }
    }
}

/// Result of [`TokenList::lookup_info`]: the counterpart identifier, or decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup {
    /// Returned for a symbol query.
    Address(Address),
    /// Returned for an address query.
    Symbol(String),
    Decimals(u8),
}

/// First token matching `query`. Duplicate matches are not reported.
pub fn find_token<'a>(tokens: &'a [TokenInfo], query: &TokenQuery) -> Option<&'a TokenInfo> {
    tokens.iter().find(|t| query.matches(t))
}

/// Project a matched token onto the value a lookup asked for.
pub fn project(token: &TokenInfo, query: &TokenQuery, want_decimals: bool) -> TokenLookup {
    if want_decimals {
        return TokenLookup::Decimals(token.decimals);
    }
    match query {
        TokenQuery::Symbol(_) => TokenLookup::Address(token.address),
        TokenQuery::Address(_) => TokenLookup::Symbol(token.symbol.clone()),
    }
}
