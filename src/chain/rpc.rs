//! [`ChainReader`] over an HTTP JSON-RPC provider.

use alloy::eips::BlockId;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;

use crate::chain::contracts::{IUniswapV2Factory, IUniswapV2Pair, IERC20};
use crate::chain::ChainReader;
use crate::domain::exchange::Reserves;
use crate::error::ChainError;

/// Contract-call client backed by an alloy provider.
#[derive(Clone)]
pub struct AlloyChainReader {
    provider: DynProvider,
}

impl AlloyChainReader {
    /// Connect to a node's HTTP JSON-RPC endpoint. No request is made until
    /// the first call.
    pub fn connect(node_url: &str) -> Result<Self, ChainError> {
        let url = node_url
            .parse::<Url>()
            .map_err(|e| ChainError::InvalidUrl {
                url: node_url.to_string(),
                reason: e.to_string(),
            })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self { provider })
    }

    /// Wrap an existing provider (any transport).
    pub fn from_provider(provider: DynProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl std::fmt::Debug for AlloyChainReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyChainReader").finish_non_exhaustive()
    }
}

#[async_trait]
impl ChainReader for AlloyChainReader {
    async fn block_number(&self) -> Result<u64, ChainError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn get_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, ChainError> {
        let factory = IUniswapV2Factory::new(factory, &self.provider);
        Ok(factory.getPair(token_a, token_b).call().await?)
    }

    async fn token0(&self, pair: Address) -> Result<Address, ChainError> {
        let pair = IUniswapV2Pair::new(pair, &self.provider);
        Ok(pair.token0().call().await?)
    }

    async fn token1(&self, pair: Address) -> Result<Address, ChainError> {
        let pair = IUniswapV2Pair::new(pair, &self.provider);
        Ok(pair.token1().call().await?)
    }

    async fn decimals(&self, token: Address) -> Result<u8, ChainError> {
        let token = IERC20::new(token, &self.provider);
        Ok(token.decimals().call().await?)
    }

    async fn reserves(&self, pair: Address, block: Option<u64>) -> Result<Reserves, ChainError> {
        let pair = IUniswapV2Pair::new(pair, &self.provider);
        let mut call = pair.getReserves();
        if let Some(n) = block {
            call = call.block(BlockId::number(n));
        }
        let r = call.call().await?;
        // uint112 always fits in u128
        Ok(Reserves {
            reserve0: r.reserve0.to::<u128>(),
            reserve1: r.reserve1.to::<u128>(),
            block_timestamp_last: r.blockTimestampLast,
        })
    }
}
