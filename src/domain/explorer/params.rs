//! Typed query parameters, one struct per explorer endpoint.
//!
//! Fields serialize in declaration order after `module` and `action`.

use alloy::primitives::Address;
use serde::{Serialize, Serializer};

use crate::domain::explorer::EventTopic;
use crate::shared::{BlockBound, SortOrder};

/// Explorer API module (`module=` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerModule {
    Account,
    Logs,
    Block,
}

impl ExplorerModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplorerModule::Account => "account",
            ExplorerModule::Logs => "logs",
            ExplorerModule::Block => "block",
        }
    }
}

/// A request to one explorer endpoint.
pub trait ExplorerQuery: Serialize {
    const MODULE: ExplorerModule;
    const ACTION: &'static str;
}

/// `account/txlist`: normal transactions of an address.
#[derive(Debug, Clone, Serialize)]
pub struct TxListParams {
    #[serde(serialize_with = "lowercase_address")]
    pub address: Address,
    pub startblock: BlockBound,
    pub endblock: BlockBound,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    pub sort: SortOrder,
}

impl ExplorerQuery for TxListParams {
    const MODULE: ExplorerModule = ExplorerModule::Account;
    const ACTION: &'static str = "txlist";
}

/// `account/tokentx`: ERC-20 transfer events touching an address.
#[derive(Debug, Clone, Serialize)]
pub struct TokenTxParams {
    pub sort: SortOrder,
    pub startblock: BlockBound,
    pub endblock: BlockBound,
    #[serde(serialize_with = "lowercase_address")]
    pub address: Address,
}

impl ExplorerQuery for TokenTxParams {
    const MODULE: ExplorerModule = ExplorerModule::Account;
    const ACTION: &'static str = "tokentx";
}

/// `logs/getLogs`: event logs emitted by a contract, filtered by `topic0`.
#[derive(Debug, Clone, Serialize)]
pub struct GetLogsParams {
    #[serde(rename = "fromBlock")]
    pub from_block: BlockBound,
    #[serde(rename = "toBlock")]
    pub to_block: BlockBound,
    #[serde(serialize_with = "lowercase_address")]
    pub address: Address,
    pub topic0: EventTopic,
}

impl ExplorerQuery for GetLogsParams {
    const MODULE: ExplorerModule = ExplorerModule::Logs;
    const ACTION: &'static str = "getLogs";
}

/// `block/getblockcountdown`: estimated time until a future block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockCountdownParams {
    pub blockno: u64,
}

impl ExplorerQuery for BlockCountdownParams {
    const MODULE: ExplorerModule = ExplorerModule::Block;
    const ACTION: &'static str = "getblockcountdown";
}

fn lowercase_address<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&address.to_string().to_lowercase())
}
