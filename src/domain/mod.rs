//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client issuing node calls or HTTP queries

pub mod exchange;
pub mod explorer;
pub mod token;
