//! Explorer sub-client: `module=…&action=…&…&apikey=…` GET queries.

use alloy::primitives::Address;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::domain::explorer::params::{
    BlockCountdownParams, ExplorerQuery, GetLogsParams, TokenTxParams, TxListParams,
};
use crate::domain::explorer::wire::{Envelope, RawBlockCountdown, RawLog, RawTokenTransfer, RawTransaction};
use crate::domain::explorer::{BlockCountdown, EventLog, EventTopic, TokenTransfer, Transaction};
use crate::error::{ExplorerError, SdkError};
use crate::http::{JsonTransport, RetryPolicy, W3hHttp};
use crate::network::MAX_END_BLOCK;
use crate::shared::{parse_quantity, BlockBound, SortOrder};

/// Client for an Etherscan-compatible explorer API.
///
/// Queries are never retried. A `status: "0"` response is `Ok(None)`;
/// transport failures are `Err`.
pub struct ExplorerClient<T = W3hHttp> {
    transport: T,
    base_url: Url,
    api_key: String,
    chain_id: Option<u64>,
}

impl ExplorerClient<W3hHttp> {
    pub fn from_config(config: &Config) -> Result<Self, SdkError> {
        let transport = W3hHttp::with_timeout(config.explorer_timeout)?;
        let mut client = Self::new(
            transport,
            &config.explorer_url,
            config.require_explorer_api_key()?,
        )?;
        client.chain_id = config.explorer_chain_id;
        Ok(client)
    }
}

impl<T: JsonTransport> ExplorerClient<T> {
    pub fn new(transport: T, base_url: &str, api_key: &str) -> Result<Self, SdkError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SdkError::Config(format!("invalid explorer URL '{}': {}", base_url, e)))?;
        Ok(Self {
            transport,
            base_url,
            api_key: api_key.to_string(),
            chain_id: None,
        })
    }

    /// Add `chainid=` to every query (multichain explorer APIs).
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for `params`, API key last.
    pub fn query_url<Q: ExplorerQuery>(&self, params: &Q) -> Result<Url, SdkError> {
        let encode = |e: serde_urlencoded::ser::Error| SdkError::Validation(e.to_string());

        let mut parts = Vec::with_capacity(5);
        if let Some(chain_id) = self.chain_id {
            parts.push(format!("chainid={}", chain_id));
        }
        parts.push(format!("module={}&action={}", Q::MODULE.as_str(), Q::ACTION));
        let encoded = serde_urlencoded::to_string(params).map_err(encode)?;
        if !encoded.is_empty() {
            parts.push(encoded);
        }
        parts.push(serde_urlencoded::to_string([("apikey", self.api_key.as_str())]).map_err(encode)?);

        let mut url = self.base_url.clone();
        url.set_query(Some(&parts.join("&")));
        Ok(url)
    }

    /// Issue one query. `Some(result)` only when the explorer reports success.
    pub async fn query<Q, R>(&self, params: &Q) -> Result<Option<R>, SdkError>
    where
        Q: ExplorerQuery + Sync,
        R: DeserializeOwned,
    {
        self.fetch_envelope(params).await?.into_result(Q::ACTION)
    }

    async fn fetch_envelope<Q>(&self, params: &Q) -> Result<Envelope, SdkError>
    where
        Q: ExplorerQuery + Sync,
    {
        let url = self.query_url(params)?;
        tracing::debug!(module = Q::MODULE.as_str(), action = Q::ACTION, "Explorer query");
        let body = self.transport.get_json(&url, &RetryPolicy::None).await?;
        Ok(serde_json::from_value(body)?)
    }

    // ── Account ──────────────────────────────────────────────────────────

    /// Normal transactions of `address` between two blocks.
    pub async fn transactions(
        &self,
        address: Address,
        start: BlockBound,
        end: BlockBound,
        sort: SortOrder,
    ) -> Result<Option<Vec<Transaction>>, SdkError> {
        let params = TxListParams {
            address,
            startblock: start,
            endblock: end,
            page: None,
            offset: None,
            sort,
        };
        let raw: Option<Vec<RawTransaction>> = self.query(&params).await?;
        raw.map(|txs| {
            txs.into_iter()
                .map(Transaction::try_from)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .map_err(SdkError::from)
    }

    /// Block of the first transaction of `address`, or `None` if it has none.
    pub async fn birth_block(&self, address: Address) -> Result<Option<u64>, SdkError> {
        let params = TxListParams {
            address,
            startblock: BlockBound::Number(0),
            endblock: BlockBound::Number(MAX_END_BLOCK),
            page: Some(1),
            offset: Some(1),
            sort: SortOrder::Asc,
        };
        let raw: Option<Vec<RawTransaction>> = self.query(&params).await?;
        let Some(first) = raw.and_then(|txs| txs.into_iter().next()) else {
            return Ok(None);
        };
        parse_quantity(&first.block_number)
            .map(Some)
            .ok_or_else(|| ExplorerError::invalid("blockNumber", first.block_number).into())
    }

    /// Birth block, or genesis when it cannot be resolved.
    async fn start_block(&self, address: Address) -> u64 {
        match self.birth_block(address).await {
            Ok(Some(block)) => block,
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(%address, error = %e, "Birth block lookup failed, scanning from genesis");
                0
            }
        }
    }

    /// ERC-20 transfers of `address`, newest first, from its birth block.
    pub async fn token_transactions(
        &self,
        address: Address,
    ) -> Result<Option<Vec<TokenTransfer>>, SdkError> {
        let first_block = self.start_block(address).await;
        let params = TokenTxParams {
            sort: SortOrder::Desc,
            startblock: BlockBound::Number(first_block),
            endblock: BlockBound::Latest,
            address,
        };
        let raw: Option<Vec<RawTokenTransfer>> = self.query(&params).await?;
        raw.map(|transfers| {
            transfers
                .into_iter()
                .map(TokenTransfer::try_from)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .map_err(SdkError::from)
    }

    // ── Logs ─────────────────────────────────────────────────────────────

    /// Logs emitted by `contract` with `topic0 == topic`, from the contract's birth block.
    pub async fn events(
        &self,
        contract: Address,
        topic: impl Into<EventTopic>,
    ) -> Result<Option<Vec<EventLog>>, SdkError> {
        let first_block = self.start_block(contract).await;
        let params = GetLogsParams {
            from_block: BlockBound::Number(first_block),
            to_block: BlockBound::Latest,
            address: contract,
            topic0: topic.into(),
        };
        let raw: Option<Vec<RawLog>> = self.query(&params).await?;
        raw.map(|logs| {
            logs.into_iter()
                .map(EventLog::try_from)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .map_err(SdkError::from)
    }

    // ── Block ────────────────────────────────────────────────────────────

    /// Estimated time until `block`. Fails with `EmptyResult` when the
    /// explorer has no estimate (e.g. the block is already mined); the
    /// error carries the explorer's message.
    pub async fn block_countdown(&self, block: u64) -> Result<BlockCountdown, SdkError> {
        let params = BlockCountdownParams { blockno: block };
        let raw: RawBlockCountdown = self
            .fetch_envelope(&params)
            .await?
            .into_required(BlockCountdownParams::ACTION)?;
        Ok(BlockCountdown::try_from(raw)?)
    }
}
