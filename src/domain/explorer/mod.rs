//! Explorer domain: account history, event logs, and block countdowns from an
//! Etherscan-compatible API.

pub mod client;
mod convert;
pub mod params;
pub mod wire;

use std::fmt;
use std::time::Duration;

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::shared::{scale_amount, ScalingError};

pub use client::ExplorerClient;

/// A normal transaction from `account/txlist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    pub hash: B256,
    pub from: Address,
    /// `None` for contract creation.
    pub to: Option<Address>,
    pub value: U256,
    pub is_error: bool,
    /// Set for contract creation.
    pub contract_address: Option<Address>,
}

/// An ERC-20 transfer from `account/tokentx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    pub hash: B256,
    pub from: Address,
    pub to: Address,
    pub token: Address,
    pub value: U256,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u8,
}

impl TokenTransfer {
    /// Transferred amount in whole tokens.
    pub fn amount(&self) -> Result<Decimal, ScalingError> {
        scale_amount(self.value, self.token_decimals)
    }
}

/// An event log from `logs/getLogs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    pub log_index: u64,
    pub transaction_hash: B256,
}

/// Estimated wait for a future block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCountdown {
    pub current_block: u64,
    pub countdown_block: u64,
    pub remaining_blocks: u64,
    pub estimate_time_in_sec: f64,
}

impl BlockCountdown {
    pub fn estimated_duration(&self) -> Duration {
        Duration::from_secs_f64(self.estimate_time_in_sec.max(0.0))
    }
}

/// `topic0` of an event: the keccak-256 of its canonical signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventTopic(pub B256);

impl EventTopic {
    /// Hash a canonical signature such as `Transfer(address,address,uint256)`.
    pub fn from_signature(signature: &str) -> Self {
        Self(keccak256(signature.as_bytes()))
    }

    /// Parse a `0x`-prefixed 32-byte hex topic.
    pub fn parse(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<B256>()
            .map(Self)
            .map_err(|e| format!("invalid topic '{}': {}", s, e))
    }

    pub fn as_b256(&self) -> &B256 {
        &self.0
    }
}

impl From<B256> for EventTopic {
    fn from(hash: B256) -> Self {
        Self(hash)
    }
}

impl fmt::Display for EventTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EventTopic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
