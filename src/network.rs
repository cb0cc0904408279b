//! Default endpoints and well-known contract addresses.

use alloy::primitives::{address, Address};

/// Default Etherscan-compatible explorer API base URL.
pub const DEFAULT_EXPLORER_URL: &str = "https://api.etherscan.io/api";

/// Default public token list (Uniswap tokens, as curated by CoinGecko).
pub const DEFAULT_TOKEN_LIST_URL: &str = "https://tokens.coingecko.com/uniswap/all.json";

/// Uniswap V2 factory on Ethereum mainnet.
pub const UNISWAP_V2_FACTORY: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

/// Explorer requests time out after this many seconds.
pub const EXPLORER_TIMEOUT_SECS: u64 = 3;

/// Upper block bound used when scanning an account's full transaction list.
pub const MAX_END_BLOCK: u64 = 99_999_999;
