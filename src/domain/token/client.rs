//! Token list sub-client: fetches the list on every lookup, no caching.

use reqwest::Url;

use crate::domain::token::wire::{TokenEntry, TokenListResponse};
use crate::domain::token::{find_token, project, TokenInfo, TokenLookup, TokenQuery};
use crate::error::SdkError;
use crate::http::{JsonTransport, RetryConfig, RetryPolicy, W3hHttp};

pub struct TokenList<T = W3hHttp> {
    transport: T,
    url: Url,
}

impl<T: JsonTransport> TokenList<T> {
    pub fn new(transport: T, url: &str) -> Result<Self, SdkError> {
        let url = Url::parse(url)
            .map_err(|e| SdkError::Config(format!("invalid token list URL '{}': {}", url, e)))?;
        Ok(Self { transport, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Download and decode the whole list. Entries that fail to decode or carry
    /// a malformed address are skipped.
    pub async fn fetch(&self) -> Result<Vec<TokenInfo>, SdkError> {
        let body = self
            .transport
            .get_json(&self.url, &RetryPolicy::Custom(RetryConfig::token_list()))
            .await?;
        let list: TokenListResponse = serde_json::from_value(body)?;

        let total = list.tokens.len();
        let tokens: Vec<TokenInfo> = list
            .tokens
            .into_iter()
            .filter_map(|value| {
                let entry = serde_json::from_value::<TokenEntry>(value)
                    .map_err(|e| tracing::debug!(error = %e, "Skipping malformed token list entry"))
                    .ok()?;
                let symbol = entry.symbol.clone();
                TokenInfo::try_from(entry)
                    .map_err(|e| tracing::debug!(%symbol, error = %e, "Skipping token list entry"))
                    .ok()
            })
            .collect();
        tracing::debug!(total, kept = tokens.len(), "Fetched token list");
        Ok(tokens)
    }

    /// Full record for a symbol (case-insensitive) or `0x` address.
    pub async fn lookup(&self, identifier: &str) -> Result<TokenInfo, SdkError> {
        let query = TokenQuery::parse(identifier)?;
        let tokens = self.fetch().await?;
        find_token(&tokens, &query)
            .cloned()
            .ok_or_else(|| SdkError::NotFound(format!("token '{}' not in list", identifier)))
    }

    /// The counterpart identifier (address for a symbol, symbol for an
    /// address), or the decimals when `want_decimals` is set.
    pub async fn lookup_info(
        &self,
        identifier: &str,
        want_decimals: bool,
    ) -> Result<TokenLookup, SdkError> {
        let query = TokenQuery::parse(identifier)?;
        let token = self.lookup(identifier).await?;
        Ok(project(&token, &query, want_decimals))
    }
}
