//! Exchange domain: Uniswap V2 pair state and the prices derived from it.

pub mod client;
pub mod sampling;

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{reserve_ratio, ScalingError};

pub use client::ExchangeReader;

/// A pair contract's reserves as of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserves {
    pub reserve0: u128,
    pub reserve1: u128,
    /// Unix seconds of the last reserve update (not the queried block's time).
    pub block_timestamp_last: u32,
}

impl Reserves {
    /// token1 per token0, both sides scaled by their decimals.
    pub fn price(&self, decimals0: u8, decimals1: u8) -> Result<f64, ScalingError> {
        reserve_ratio(self.reserve0, decimals0, self.reserve1, decimals1)
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.block_timestamp_last as i64, 0).unwrap_or_default()
    }
}

/// The two tokens of a pair and their decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairTokens {
    pub pair: Address,
    pub token0: Address,
    pub token1: Address,
    pub decimals0: u8,
    pub decimals1: u8,
}

impl PairTokens {
    pub fn price(&self, reserves: &Reserves) -> Result<f64, ScalingError> {
        reserves.price(self.decimals0, self.decimals1)
    }
}

/// One point of a historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Block the reserves were read at.
    pub block: u64,
    pub timestamp: DateTime<Utc>,
    /// token1 per token0.
    pub price: f64,
}
