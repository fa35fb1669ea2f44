//! Serialization-ready response shapes for the txpool namespace.
//!
//! `txpool_content` and `txpool_inspect` share the same three-level key
//! structure: category → account (full hex string) → nonce (decimal
//! string). Ordered maps keep the serialized output stable across calls
//! against an unchanged pool.

use pool_types::RpcTransaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pool occupancy counters returned by `txpool_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Transactions eligible for inclusion in the next block.
    pub pending: usize,
    /// Transactions held back, e.g. behind a nonce gap.
    pub queued: usize,
}

/// One category of pool contents: account → nonce → external record.
pub type AccountContent = BTreeMap<String, BTreeMap<String, RpcTransaction>>;

/// Full pool dump returned by `txpool_content`.
///
/// Both categories are always present; an empty category serializes as an
/// empty object, never as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolContent {
    pub pending: AccountContent,
    pub queued: AccountContent,
}

/// One category of transaction summaries: account → nonce → one-liner.
pub type AccountSummaries = BTreeMap<String, BTreeMap<String, String>>;

/// Textual pool dump returned by `txpool_inspect`, same key structure as
/// [`PoolContent`] with a one-line summary per transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolInspect {
    pub pending: AccountSummaries,
    pub queued: AccountSummaries,
}
