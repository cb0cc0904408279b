//! Shared newtypes and utilities used across all domain modules.

pub mod scaling;

pub use scaling::{reserve_ratio, scale_amount, scale_down, ScalingError};

use alloy::primitives::Address;
use serde::{Serialize, Serializer};
use std::fmt;

// ─── Addresses ───────────────────────────────────────────────────────────────

/// Parse a 20-byte hex address in any letter case.
///
/// The mixed-case EIP-55 checksum is not enforced on input; every
/// [`Address`] renders checksummed through `Display`.
pub fn parse_address(s: &str) -> Result<Address, String> {
    let trimmed = s.trim();
    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(format!("address must be 0x-prefixed: '{}'", s));
    }
    trimmed
        .parse::<Address>()
        .map_err(|e| format!("invalid address '{}': {}", s, e))
}

/// Parse an explorer quantity, either decimal (`"12345"`) or hex (`"0x3039"`).
///
/// Empty strings and `"0x"` parse as zero, matching how explorers render
/// missing numeric fields.
pub fn parse_quantity(s: &str) -> Option<u64> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some("") => Some(0),
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None if s.is_empty() => Some(0),
        None => s.parse::<u64>().ok(),
    }
}

// ─── BlockBound ──────────────────────────────────────────────────────────────

/// A block range bound in explorer queries: a concrete height or `latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBound {
    Number(u64),
    Latest,
}

impl fmt::Display for BlockBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockBound::Number(n) => write!(f, "{}", n),
            BlockBound::Latest => write!(f, "latest"),
        }
    }
}

impl From<u64> for BlockBound {
    fn from(n: u64) -> Self {
        BlockBound::Number(n)
    }
}

impl Serialize for BlockBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ─── SortOrder ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
