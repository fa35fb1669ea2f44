//! TxPool JSON-RPC methods backed by the pool capability.
//!
//! Every method is a stateless adapter: call the backend, reshape the
//! result, return it. No snapshot is retained across calls.

use crate::domain::content::{
    AccountContent, AccountSummaries, PoolContent, PoolInspect, PoolStatus,
};
use crate::ports::{AccountPool, PoolBackend};
use pool_types::{Hash, PooledTransaction, U256};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

/// TxPool RPC methods handler
pub struct TxPoolRpc {
    backend: Arc<dyn PoolBackend>,
}

impl TxPoolRpc {
    pub fn new(backend: Arc<dyn PoolBackend>) -> Self {
        Self { backend }
    }

    /// txpool_status - number of pending and queued transactions in the pool.
    #[instrument(skip(self))]
    pub async fn status(&self) -> PoolStatus {
        let (pending, queued) = self.backend.stats().await;
        PoolStatus { pending, queued }
    }

    /// txpool_content - the transactions contained within the pool, keyed
    /// by sender account and decimal nonce.
    #[instrument(skip(self))]
    pub async fn content(&self) -> PoolContent {
        let (pending, queued) = self.backend.content().await;
        PoolContent {
            pending: flatten(&pending),
            queued: flatten(&queued),
        }
    }

    /// txpool_inspect - one-line textual summaries, same key structure as
    /// txpool_content.
    #[instrument(skip(self))]
    pub async fn inspect(&self) -> PoolInspect {
        let (pending, queued) = self.backend.content().await;
        PoolInspect {
            pending: summarize(&pending),
            queued: summarize(&queued),
        }
    }

    /// txpool_setGasPrice - forwards the new minimum gas price to the pool
    /// and relays its verdict.
    #[instrument(skip(self))]
    pub async fn set_gas_price(&self, price: U256) -> bool {
        self.backend.set_gas_price(price).await
    }
}

/// Flattens one pool category into account → nonce → external record.
///
/// The key is the first action's nonce rendered in decimal. Should a
/// sender's sequence ever carry two transactions with the same first
/// nonce, the later one takes the map slot; the pool's replacement rules
/// keep that from happening in practice.
fn flatten(snapshot: &AccountPool) -> AccountContent {
    let mut content = AccountContent::new();
    for (account, txs) in snapshot {
        let mut dump = BTreeMap::new();
        for tx in txs {
            dump.insert(nonce_key(tx), tx.to_rpc_transaction(Hash::zero(), 0, 0));
        }
        content.insert(account_key(account), dump);
    }
    content
}

/// Same walk as [`flatten`], producing textual summaries.
fn summarize(snapshot: &AccountPool) -> AccountSummaries {
    let mut summaries = AccountSummaries::new();
    for (account, txs) in snapshot {
        let mut dump = BTreeMap::new();
        for tx in txs {
            dump.insert(nonce_key(tx), tx_summary(tx));
        }
        summaries.insert(account_key(account), dump);
    }
    summaries
}

/// Canonical account key: full lowercase hex with 0x prefix.
fn account_key(account: &pool_types::Address) -> String {
    format!("{:#x}", account)
}

/// Decimal rendering of the first action's nonce.
fn nonce_key(tx: &PooledTransaction) -> String {
    tx.nonce().to_string()
}

/// Format a transaction as a one-line summary for txpool_inspect.
fn tx_summary(tx: &PooledTransaction) -> String {
    let action = tx.first_action();
    let to = match action.to {
        Some(to) => format!("{:#x}", to),
        None => "contract creation".to_string(),
    };
    format!(
        "{:#x} → {}: {} + {} gas × {}",
        action.from, to, action.value, action.gas_limit, tx.gas_price
    )
}
