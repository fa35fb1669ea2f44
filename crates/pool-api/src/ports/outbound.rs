//! Outbound port to the transaction pool.

use async_trait::async_trait;
use pool_types::{Address, PooledTransaction, U256};
use std::collections::HashMap;

/// Pool contents for one category, keyed by sender. Each sequence is in
/// the pool's nonce order and every transaction in it has a distinct
/// first-action nonce.
pub type AccountPool = HashMap<Address, Vec<PooledTransaction>>;

/// Capability surface the pool API needs from a transaction pool.
///
/// Implemented by whatever owns the real pool: a full node, a light client
/// backend or an in-memory simulation. The API never mutates pool
/// membership through this trait; `set_gas_price` is the single control
/// knob it exposes.
#[async_trait]
pub trait PoolBackend: Send + Sync {
    /// Current number of pending and queued transactions.
    async fn stats(&self) -> (usize, usize);

    /// Snapshot of the pool contents, split into pending and queued.
    ///
    /// The snapshot is an owned copy taken at call time. The pool keeps
    /// mutating concurrently, so two consecutive snapshots may differ and
    /// neither is considered stale.
    async fn content(&self) -> (AccountPool, AccountPool);

    /// Updates the minimum gas price the pool accepts for admission.
    ///
    /// Returns whether the pool applied the change. A `false` carries no
    /// reason; the pool decides rejection on its own terms.
    async fn set_gas_price(&self, price: U256) -> bool;
}
