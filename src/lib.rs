//! # w3h
//!
//! Thin read-only helpers over Ethereum data sources: Uniswap V2 pair pricing
//! through a node's JSON-RPC endpoint, and an Etherscan-style explorer client.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared value types, scaling arithmetic, domain models
//! 2. **Chain**: `ChainReader` seam with the alloy-backed `AlloyChainReader`
//! 3. **HTTP API**: `W3hHttp` with per-call retry policies
//! 4. **High-Level Client**: `W3hClient` with sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use w3h::prelude::*;
//!
//! let client = W3hClient::from_env()?;
//!
//! let usdc = client.tokens().lookup("USDC").await?;
//! let weth = client.tokens().lookup("WETH").await?;
//! let price = client.exchange().price_for_tokens(usdc.address, weth.address).await?;
//!
//! let birth = client.explorer().birth_block(usdc.address).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types and fixed-point scaling.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Well-known endpoints and contract addresses.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: Chain ───────────────────────────────────────────────────────────

/// Contract bindings and the node reader.
pub mod chain;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `W3hClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::{BlockBound, SortOrder};

    // Domain types: exchange
    pub use crate::domain::exchange::client::ExchangeReader;
    pub use crate::domain::exchange::{PairTokens, PriceSample, Reserves};

    // Domain types: explorer
    pub use crate::domain::explorer::client::ExplorerClient;
    pub use crate::domain::explorer::{
        BlockCountdown, EventLog, EventTopic, TokenTransfer, Transaction,
    };

    // Domain types: token list
    pub use crate::domain::token::client::TokenList;
    pub use crate::domain::token::{TokenInfo, TokenLookup, TokenQuery};

    // Chain
    pub use crate::chain::{AlloyChainReader, ChainReader};

    // Errors
    pub use crate::error::{ChainError, ExplorerError, HttpError, SdkError};
    pub use crate::shared::ScalingError;

    // Config + network
    pub use crate::config::Config;
    pub use crate::network::{DEFAULT_EXPLORER_URL, DEFAULT_TOKEN_LIST_URL, UNISWAP_V2_FACTORY};

    // HTTP client + top-level client
    pub use crate::client::{W3hClient, W3hClientBuilder};
    pub use crate::http::{JsonTransport, RetryConfig, RetryPolicy, W3hHttp};
}
