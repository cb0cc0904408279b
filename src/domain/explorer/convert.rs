//! Conversions from explorer wire records to typed domain records.

use std::str::FromStr;

use alloy::primitives::{Address, Bytes, B256, U256};
use chrono::{DateTime, Utc};

use super::wire::{RawBlockCountdown, RawLog, RawTokenTransfer, RawTransaction};
use super::{BlockCountdown, EventLog, TokenTransfer, Transaction};
use crate::error::ExplorerError;
use crate::shared::{parse_address, parse_quantity};

fn quantity(field: &'static str, s: &str) -> Result<u64, ExplorerError> {
    parse_quantity(s).ok_or_else(|| ExplorerError::invalid(field, s))
}

fn address(field: &'static str, s: &str) -> Result<Address, ExplorerError> {
    parse_address(s).map_err(|_| ExplorerError::invalid(field, s))
}

/// Empty string means "no address" (contract creation, missing counterparty).
fn optional_address(field: &'static str, s: &str) -> Result<Option<Address>, ExplorerError> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        address(field, s).map(Some)
    }
}

fn hash(field: &'static str, s: &str) -> Result<B256, ExplorerError> {
    B256::from_str(s.trim()).map_err(|_| ExplorerError::invalid(field, s))
}

fn uint(field: &'static str, s: &str) -> Result<U256, ExplorerError> {
    U256::from_str(s.trim()).map_err(|_| ExplorerError::invalid(field, s))
}

fn timestamp(field: &'static str, s: &str) -> Result<DateTime<Utc>, ExplorerError> {
    let secs = quantity(field, s)?;
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or_else(|| ExplorerError::invalid(field, s))
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = ExplorerError;

    fn try_from(tx: RawTransaction) -> Result<Self, Self::Error> {
        Ok(Self {
            block_number: quantity("blockNumber", &tx.block_number)?,
            timestamp: timestamp("timeStamp", &tx.time_stamp)?,
            hash: hash("hash", &tx.hash)?,
            from: address("from", &tx.from)?,
            to: optional_address("to", &tx.to)?,
            value: uint("value", &tx.value)?,
            is_error: tx.is_error == "1",
            contract_address: optional_address("contractAddress", &tx.contract_address)?,
        })
    }
}

impl TryFrom<RawTokenTransfer> for TokenTransfer {
    type Error = ExplorerError;

    fn try_from(t: RawTokenTransfer) -> Result<Self, Self::Error> {
        let decimals = quantity("tokenDecimal", &t.token_decimal)?;
        Ok(Self {
            block_number: quantity("blockNumber", &t.block_number)?,
            timestamp: timestamp("timeStamp", &t.time_stamp)?,
            hash: hash("hash", &t.hash)?,
            from: address("from", &t.from)?,
            to: address("to", &t.to)?,
            token: address("contractAddress", &t.contract_address)?,
            value: uint("value", &t.value)?,
            token_name: t.token_name,
            token_symbol: t.token_symbol,
            token_decimals: u8::try_from(decimals)
                .map_err(|_| ExplorerError::invalid("tokenDecimal", t.token_decimal.clone()))?,
        })
    }
}

impl TryFrom<RawLog> for EventLog {
    type Error = ExplorerError;

    fn try_from(log: RawLog) -> Result<Self, Self::Error> {
        let topics = log
            .topics
            .iter()
            .map(|t| hash("topics", t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            address: address("address", &log.address)?,
            topics,
            data: Bytes::from_str(log.data.trim()).map_err(|_| ExplorerError::invalid("data", log.data.clone()))?,
            block_number: quantity("blockNumber", &log.block_number)?,
            timestamp: timestamp("timeStamp", &log.time_stamp)?,
            log_index: quantity("logIndex", &log.log_index)?,
            transaction_hash: hash("transactionHash", &log.transaction_hash)?,
        })
    }
}

impl TryFrom<RawBlockCountdown> for BlockCountdown {
    type Error = ExplorerError;

    fn try_from(c: RawBlockCountdown) -> Result<Self, Self::Error> {
        Ok(Self {
            current_block: quantity("CurrentBlock", &c.current_block)?,
            countdown_block: quantity("CountdownBlock", &c.countdown_block)?,
            remaining_blocks: quantity("RemainingBlock", &c.remaining_block)?,
            estimate_time_in_sec: c
                .estimate_time_in_sec
                .trim()
                .parse::<f64>()
                .map_err(|_| ExplorerError::invalid("EstimateTimeInSec", c.estimate_time_in_sec.clone()))?,
        })
    }
}
