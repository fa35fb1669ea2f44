//! The multi-action transaction model and its stable external view.
//!
//! A transaction bundles one or more actions under a single gas price. The
//! first action's nonce orders the transaction within its sender's sequence,
//! which is why the pool and the API both key on it.

use crate::primitives::{Address, Bytes, Hash, U256};
use serde::{Deserialize, Serialize};

/// A single action within a transaction: one transfer or contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Sender's nonce for this action.
    pub nonce: u64,
    /// Sender address.
    pub from: Address,
    /// Recipient address (None for contract creation).
    pub to: Option<Address>,
    /// Amount transferred in base units.
    pub value: U256,
    /// Gas limit for this action.
    pub gas_limit: u64,
    /// Call data or contract code.
    pub payload: Bytes,
}

/// A signed transaction sitting in the pool, not yet included in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PooledTransaction {
    /// Constituent actions, never empty for a pool-admitted transaction.
    pub actions: Vec<Action>,
    /// Gas price offered for the whole transaction.
    pub gas_price: U256,
    /// Transaction hash.
    pub hash: Hash,
}

impl PooledTransaction {
    /// The first action of this transaction.
    ///
    /// # Panics
    ///
    /// Panics if the action list is empty. The pool never admits an empty
    /// transaction, so an empty list means the backend handed out a
    /// corrupted handle.
    pub fn first_action(&self) -> &Action {
        &self.actions[0]
    }

    /// Nonce of the first action, the key the pool orders this
    /// transaction under.
    pub fn nonce(&self) -> u64 {
        self.first_action().nonce
    }

    /// Builds the stable external view of this transaction.
    ///
    /// Block context comes from the caller: a zero hash, zero height and
    /// zero index mark a transaction that has not been mined yet.
    pub fn to_rpc_transaction(
        &self,
        block_hash: Hash,
        block_number: u64,
        transaction_index: u64,
    ) -> RpcTransaction {
        RpcTransaction {
            block_hash,
            block_number,
            transaction_index,
            hash: self.hash,
            gas_price: self.gas_price,
            actions: self.actions.iter().map(RpcAction::from).collect(),
        }
    }
}

/// External view of a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcAction {
    pub nonce: u64,
    pub from: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    pub value: U256,
    pub gas_limit: u64,
    pub payload: Bytes,
}

impl From<&Action> for RpcAction {
    fn from(action: &Action) -> Self {
        Self {
            nonce: action.nonce,
            from: action.from,
            to: action.to,
            value: action.value,
            gas_limit: action.gas_limit,
            payload: action.payload.clone(),
        }
    }
}

/// External view of a transaction, stable across releases.
///
/// Block fields are zero for transactions still waiting in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub block_hash: Hash,
    pub block_number: u64,
    pub transaction_index: u64,
    pub hash: Hash,
    pub gas_price: U256,
    pub actions: Vec<RpcAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx(nonce: u64) -> PooledTransaction {
        PooledTransaction {
            actions: vec![Action {
                nonce,
                from: Address::repeat_byte(0x11),
                to: Some(Address::repeat_byte(0x22)),
                value: U256::from(1u64),
                gas_limit: 21_000,
                payload: Bytes::new(),
            }],
            gas_price: U256::from(1_000_000_000u64),
            hash: Hash::repeat_byte(0xab),
        }
    }

    #[test]
    fn test_nonce_comes_from_first_action() {
        let mut tx = sample_tx(5);
        tx.actions.push(Action {
            nonce: 9,
            ..tx.actions[0].clone()
        });
        assert_eq!(tx.nonce(), 5);
    }

    #[test]
    #[should_panic]
    fn test_nonce_panics_on_empty_actions() {
        let mut tx = sample_tx(0);
        tx.actions.clear();
        tx.nonce();
    }

    #[test]
    fn test_rpc_view_keeps_unmined_block_context() {
        let tx = sample_tx(5);
        let rpc = tx.to_rpc_transaction(Hash::zero(), 0, 0);
        assert_eq!(rpc.block_hash, Hash::zero());
        assert_eq!(rpc.block_number, 0);
        assert_eq!(rpc.transaction_index, 0);
        assert_eq!(rpc.hash, tx.hash);
        assert_eq!(rpc.actions.len(), 1);
        assert_eq!(rpc.actions[0].nonce, 5);
    }

    #[test]
    fn test_rpc_transaction_serializes_camel_case() {
        let rpc = sample_tx(5).to_rpc_transaction(Hash::zero(), 0, 0);
        let json = serde_json::to_value(&rpc).unwrap();
        assert!(json.get("blockHash").is_some());
        assert!(json.get("blockNumber").is_some());
        assert!(json.get("transactionIndex").is_some());
        assert!(json.get("gasPrice").is_some());
        assert_eq!(json["actions"][0]["gasLimit"], 21_000);
    }

    #[test]
    fn test_contract_creation_omits_recipient() {
        let mut tx = sample_tx(0);
        tx.actions[0].to = None;
        let json = serde_json::to_value(tx.to_rpc_transaction(Hash::zero(), 0, 0)).unwrap();
        assert!(json["actions"][0].get("to").is_none());
    }
}
