//! ExchangeReader against an in-memory node and token list.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use w3h::chain::ChainReader;
use w3h::domain::exchange::{ExchangeReader, Reserves};
use w3h::domain::token::{TokenList, TokenLookup};
use w3h::error::{ChainError, HttpError, SdkError};
use w3h::http::{JsonTransport, RetryPolicy};
use w3h::shared::ScalingError;

const FACTORY: Address = Address::repeat_byte(0xfa);
const PAIR: Address = Address::repeat_byte(0x01);
const TOKEN0: Address = Address::repeat_byte(0x10);
const TOKEN1: Address = Address::repeat_byte(0x11);
const TIP: u64 = 1_000;

// ── Mock node ────────────────────────────────────────────────────────────────

struct MockChain {
    pairs: HashMap<(Address, Address), Address>,
    decimals: HashMap<Address, u8>,
    /// Reserves returned for every block not listed in `failing_blocks`.
    reserves: Reserves,
    failing_blocks: Vec<u64>,
    reads: Mutex<Vec<Option<u64>>>,
}

impl MockChain {
    fn new(reserve0: u128, reserve1: u128) -> Self {
        let mut pairs = HashMap::new();
        pairs.insert((TOKEN0, TOKEN1), PAIR);
        Self {
            pairs,
            decimals: HashMap::from([(TOKEN0, 6), (TOKEN1, 18)]),
            reserves: Reserves {
                reserve0,
                reserve1,
                block_timestamp_last: 1_700_000_000,
            },
            failing_blocks: Vec::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    fn read_blocks(&self) -> Vec<Option<u64>> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainReader for MockChain {
    async fn block_number(&self) -> Result<u64, ChainError> {
        Ok(TIP)
    }

    async fn get_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, ChainError> {
        assert_eq!(factory, FACTORY);
        Ok(self
            .pairs
            .get(&(token_a, token_b))
            .or_else(|| self.pairs.get(&(token_b, token_a)))
            .copied()
            .unwrap_or(Address::ZERO))
    }

    async fn token0(&self, _pair: Address) -> Result<Address, ChainError> {
        Ok(TOKEN0)
    }

    async fn token1(&self, _pair: Address) -> Result<Address, ChainError> {
        Ok(TOKEN1)
    }

    async fn decimals(&self, token: Address) -> Result<u8, ChainError> {
        self.decimals
            .get(&token)
            .copied()
            .ok_or_else(|| ChainError::Unavailable(format!("no decimals for {}", token)))
    }

    async fn reserves(&self, _pair: Address, block: Option<u64>) -> Result<Reserves, ChainError> {
        self.reads.lock().unwrap().push(block);
        if let Some(b) = block {
            if self.failing_blocks.contains(&b) {
                return Err(ChainError::Unavailable(format!("missing trie node at {}", b)));
            }
        }
        Ok(self.reserves)
    }
}

// ── Mock token list ──────────────────────────────────────────────────────────

struct StaticList(Value);

#[async_trait]
impl JsonTransport for StaticList {
    async fn get_json(&self, _url: &Url, _retry: &RetryPolicy) -> Result<Value, HttpError> {
        Ok(self.0.clone())
    }
}

fn token_list() -> TokenList<StaticList> {
    let body = json!({
        "name": "Test List",
        "tokens": [
            {
                "chainId": 1,
                "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "name": "USD Coin",
                "symbol": "USDC",
                "decimals": 6
            },
            {
                "chainId": 1,
                "address": "not-an-address",
                "name": "Broken",
                "symbol": "BRK",
                "decimals": 18
            },
            {
                "chainId": 1,
                "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                "name": "Wrapped Ether",
                "symbol": "WETH",
                "decimals": 18
            }
        ]
    });
    TokenList::new(StaticList(body), "https://tokens.example.org/all.json").unwrap()
}

fn reader(chain: MockChain) -> ExchangeReader<MockChain, StaticList> {
    ExchangeReader::new(chain, FACTORY, token_list())
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// ── Pairs and prices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn resolve_pair_is_order_independent() {
    let reader = reader(MockChain::new(1, 1));
    assert_eq!(reader.resolve_pair(TOKEN0, TOKEN1).await.unwrap(), PAIR);
    assert_eq!(reader.resolve_pair(TOKEN1, TOKEN0).await.unwrap(), PAIR);
}

#[tokio::test]
async fn resolve_pair_returns_zero_address_for_unknown_pair() {
    let reader = reader(MockChain::new(1, 1));
    let unknown = Address::repeat_byte(0x99);
    assert_eq!(reader.resolve_pair(TOKEN0, unknown).await.unwrap(), Address::ZERO);
}

#[tokio::test]
async fn current_price_scales_both_reserves() {
    let reader = reader(MockChain::new(1_000_000, 500));
    let price = reader.current_price(PAIR).await.unwrap();
    assert_close(price, 5e-16);
    assert_eq!(reader.chain().read_blocks(), vec![None]);
}

#[tokio::test]
async fn current_price_with_zero_reserve0_fails() {
    let reader = reader(MockChain::new(0, 500));
    let err = reader.current_price(PAIR).await.unwrap_err();
    assert!(matches!(err, SdkError::Scaling(ScalingError::ZeroReserve)));
}

#[tokio::test]
async fn price_for_tokens_resolves_then_prices() {
    let reader = reader(MockChain::new(3_000_000_000, 10u128.pow(18)));
    let price = reader.price_for_tokens(TOKEN1, TOKEN0).await.unwrap();
    assert_close(price, 1.0 / 3000.0);
}

#[tokio::test]
async fn price_for_tokens_without_pair_is_not_found() {
    let reader = reader(MockChain::new(1, 1));
    let err = reader
        .price_for_tokens(TOKEN0, Address::repeat_byte(0x99))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)));
    assert!(reader.chain().read_blocks().is_empty());
}

// ── Historical sampling ──────────────────────────────────────────────────────

#[tokio::test]
async fn historical_prices_are_ascending_and_bounded_by_tip() {
    let reader = reader(MockChain::new(1_000_000, 500));
    let samples = reader.historical_prices(PAIR, 100, 30).await.unwrap();

    let blocks: Vec<u64> = samples.iter().map(|s| s.block).collect();
    assert_eq!(blocks, vec![900, 930, 960, 990]);
    assert!(blocks.iter().all(|b| *b <= TIP));
    assert!(samples.iter().all(|s| s.timestamp.timestamp() == 1_700_000_000));
    assert_close(samples[0].price, 5e-16);

    let reads: Vec<Option<u64>> = blocks.iter().map(|b| Some(*b)).collect();
    assert_eq!(reader.chain().read_blocks(), reads);
}

#[tokio::test]
async fn historical_prices_one_sample_per_block() {
    let reader = reader(MockChain::new(1_000_000, 500));
    let samples = reader.historical_prices(PAIR, 5, 1).await.unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples.first().unwrap().block, 995);
    assert_eq!(samples.last().unwrap().block, 999);
}

#[tokio::test]
async fn historical_prices_zero_lookback_is_empty() {
    let reader = reader(MockChain::new(1_000_000, 500));
    let samples = reader.historical_prices(PAIR, 0, 10).await.unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn historical_prices_rejects_zero_step() {
    let reader = reader(MockChain::new(1_000_000, 500));
    let err = reader.historical_prices(PAIR, 100, 0).await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[tokio::test]
async fn historical_prices_abort_on_first_failed_read() {
    let mut chain = MockChain::new(1_000_000, 500);
    chain.failing_blocks = vec![950];
    let reader = reader(chain);

    let err = reader.historical_prices(PAIR, 100, 50).await.unwrap_err();
    assert!(matches!(err, SdkError::Chain(ChainError::Unavailable(_))));
    assert_eq!(reader.chain().read_blocks(), vec![Some(900), Some(950)]);
}

// ── Token list ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn symbol_lookup_ignores_case() {
    let reader = reader(MockChain::new(1, 1));
    let upper = reader.lookup_token_info("USDC", false).await.unwrap();
    let lower = reader.lookup_token_info("usdc", false).await.unwrap();
    assert_eq!(upper, lower);
    assert!(matches!(upper, TokenLookup::Address(_)));
}

#[tokio::test]
async fn address_lookup_returns_symbol_or_decimals() {
    let reader = reader(MockChain::new(1, 1));
    let weth = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    assert_eq!(
        reader.lookup_token_info(weth, false).await.unwrap(),
        TokenLookup::Symbol("WETH".to_string())
    );
    assert_eq!(
        reader.lookup_token_info(weth, true).await.unwrap(),
        TokenLookup::Decimals(18)
    );
}

#[tokio::test]
async fn lookup_without_match_is_not_found() {
    let reader = reader(MockChain::new(1, 1));
    let err = reader.lookup_token("NOPE").await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)));
}

#[tokio::test]
async fn malformed_entries_are_skipped() {
    let tokens = token_list().fetch().await.unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.symbol != "BRK"));
}

#[tokio::test]
async fn undecodable_entries_do_not_break_the_list() {
    let body = json!({
        "tokens": [
            {
                "chainId": 1,
                "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "name": "USD Coin",
                "symbol": "USDC",
                "decimals": 6
            },
            {
                "chainId": 1,
                "address": "0x1111111111111111111111111111111111111111",
                "name": "Too Precise",
                "symbol": "BIG",
                "decimals": 300
            },
            {
                "chainId": 1,
                "address": "0x2222222222222222222222222222222222222222",
                "decimals": 18
            },
            "not even an object"
        ]
    });
    let list = TokenList::new(StaticList(body), "https://tokens.example.org/all.json").unwrap();

    assert_eq!(list.fetch().await.unwrap().len(), 1);
    assert_eq!(list.lookup("USDC").await.unwrap().decimals, 6);
    assert!(matches!(list.lookup("BIG").await, Err(SdkError::NotFound(_))));
}

#[tokio::test]
async fn hex_looking_symbol_is_matched_as_symbol() {
    let body = json!({
        "tokens": [{
            "chainId": 1,
            "address": "0xb6ed7644c69416d67b522e20bc294a9a9b405b31",
            "name": "0xBitcoin Token",
            "symbol": "0xBTC",
            "decimals": 8
        }]
    });
    let list = TokenList::new(StaticList(body), "https://tokens.example.org/all.json").unwrap();

    let token = list.lookup("0xbtc").await.unwrap();
    assert_eq!(token.symbol, "0xBTC");
    assert_eq!(
        list.lookup_info("0xBTC", false).await.unwrap(),
        TokenLookup::Address(token.address)
    );
}
