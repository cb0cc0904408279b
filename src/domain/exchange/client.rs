//! Exchange reader: pair resolution, spot price, and historical price sampling.

use alloy::primitives::Address;

use crate::chain::{AlloyChainReader, ChainReader};
use crate::config::Config;
use crate::domain::exchange::sampling::sample_blocks;
use crate::domain::exchange::{PairTokens, PriceSample, Reserves};
use crate::domain::token::{TokenInfo, TokenList, TokenLookup};
use crate::error::SdkError;
use crate::http::{JsonTransport, W3hHttp};

/// Reads and normalizes Uniswap V2 pair state through a [`ChainReader`].
///
/// Every call goes to the node; nothing is cached between calls.
pub struct ExchangeReader<C = AlloyChainReader, T = W3hHttp> {
    chain: C,
    factory: Address,
    tokens: TokenList<T>,
}

impl ExchangeReader<AlloyChainReader, W3hHttp> {
    /// Connect to `config.node_url` and use `config.factory` for pair lookups.
    pub fn from_config(config: &Config) -> Result<Self, SdkError> {
        let chain = AlloyChainReader::connect(config.require_node_url()?)?;
        let tokens = TokenList::new(W3hHttp::new()?, &config.token_list_url)?;
        Ok(Self::new(chain, config.factory, tokens))
    }
}

impl<C: ChainReader, T: JsonTransport> ExchangeReader<C, T> {
    pub fn new(chain: C, factory: Address, tokens: TokenList<T>) -> Self {
        Self {
            chain,
            factory,
            tokens,
        }
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    pub fn tokens(&self) -> &TokenList<T> {
        &self.tokens
    }

    // ── Pairs ────────────────────────────────────────────────────────────

    /// Pair contract for two tokens, or the zero address when the factory has none.
    pub async fn resolve_pair(&self, token_a: Address, token_b: Address) -> Result<Address, SdkError> {
        let pair = self.chain.get_pair(self.factory, token_a, token_b).await?;
        tracing::debug!(%token_a, %token_b, %pair, "Resolved pair");
        Ok(pair)
    }

    /// Both tokens of `pair` with their decimals.
    pub async fn pair_tokens(&self, pair: Address) -> Result<PairTokens, SdkError> {
        let token0 = self.chain.token0(pair).await?;
        let token1 = self.chain.token1(pair).await?;
        let decimals0 = self.chain.decimals(token0).await?;
        let decimals1 = self.chain.decimals(token1).await?;
        Ok(PairTokens {
            pair,
            token0,
            token1,
            decimals0,
            decimals1,
        })
    }

    /// Raw reserves at `block`, or at the latest block when `None`.
    pub async fn reserves(&self, pair: Address, block: Option<u64>) -> Result<Reserves, SdkError> {
        Ok(self.chain.reserves(pair, block).await?)
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// Current token1-per-token0 price of `pair`.
    pub async fn current_price(&self, pair: Address) -> Result<f64, SdkError> {
        let tokens = self.pair_tokens(pair).await?;
        let reserves = self.chain.reserves(pair, None).await?;
        Ok(tokens.price(&reserves)?)
    }

    /// Current price for two tokens, resolving their pair first.
    pub async fn price_for_tokens(&self, token_a: Address, token_b: Address) -> Result<f64, SdkError> {
        let pair = self.resolve_pair(token_a, token_b).await?;
        if pair == Address::ZERO {
            return Err(SdkError::NotFound(format!(
                "no pair for {} / {}",
                token_a, token_b
            )));
        }
        self.current_price(pair).await
    }

    /// Price series over the last `block_lookback` blocks, one sample every `step` blocks.
    ///
    /// Samples are read one block at a time in ascending order. The first
    /// failing read aborts the whole series.
    pub async fn historical_prices(
        &self,
        pair: Address,
        block_lookback: u64,
        step: u64,
    ) -> Result<Vec<PriceSample>, SdkError> {
        let tokens = self.pair_tokens(pair).await?;
        let tip = self.chain.block_number().await?;
        let blocks = sample_blocks(tip, block_lookback, step)?;
        tracing::debug!(%pair, tip, samples = blocks.len(), step, "Sampling historical reserves");

        let mut samples = Vec::with_capacity(blocks.len());
        for block in blocks {
            let reserves = self.chain.reserves(pair, Some(block)).await?;
            samples.push(PriceSample {
                block,
                timestamp: reserves.updated_at(),
                price: tokens.price(&reserves)?,
            });
        }
        Ok(samples)
    }

    // ── Token list ───────────────────────────────────────────────────────

    /// Look up a token by symbol or address in the static token list.
    pub async fn lookup_token(&self, identifier: &str) -> Result<TokenInfo, SdkError> {
        self.tokens.lookup(identifier).await
    }

    /// Counterpart identifier or decimals for a symbol/address.
    pub async fn lookup_token_info(
        &self,
        identifier: &str,
        want_decimals: bool,
    ) -> Result<TokenLookup, SdkError> {
        self.tokens.lookup_info(identifier, want_decimals).await
    }
}
