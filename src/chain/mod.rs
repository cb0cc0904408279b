//! Node access: the contract calls the exchange reader depends on.
//!
//! [`ChainReader`] is the seam between pricing logic and the node. The
//! production implementation is [`rpc::AlloyChainReader`].

pub mod contracts;
pub mod rpc;

pub use rpc::AlloyChainReader;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::domain::exchange::Reserves;
use crate::error::ChainError;

/// Read-only contract calls against an EVM node.
///
/// `block = None` reads at the latest block; `Some(n)` reads historical state
/// at height `n` and requires an archive node for old heights.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Current chain tip.
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// `factory.getPair(token_a, token_b)`.
    async fn get_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, ChainError>;

    async fn token0(&self, pair: Address) -> Result<Address, ChainError>;

    async fn token1(&self, pair: Address) -> Result<Address, ChainError>;

    async fn decimals(&self, token: Address) -> Result<u8, ChainError>;

    async fn reserves(&self, pair: Address, block: Option<u64>) -> Result<Reserves, ChainError>;
}
