//! Integration tests driving the txpool RPC surface through a mock pool
//! backend.

use async_trait::async_trait;
use parking_lot::Mutex;
use pool_api::{AccountPool, PoolBackend, TxPoolRpc};
use pool_types::{Action, Address, Bytes, Hash, PooledTransaction, U256};
use std::sync::Arc;

/// Scriptable pool backend recording what the API forwards to it.
struct MockBackend {
    stats: (usize, usize),
    pending: AccountPool,
    queued: AccountPool,
    accept_gas_price: bool,
    last_gas_price: Mutex<Option<U256>>,
}

impl MockBackend {
    fn empty() -> Self {
        Self {
            stats: (0, 0),
            pending: AccountPool::new(),
            queued: AccountPool::new(),
            accept_gas_price: true,
            last_gas_price: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PoolBackend for MockBackend {
    async fn stats(&self) -> (usize, usize) {
        self.stats
    }

    async fn content(&self) -> (AccountPool, AccountPool) {
        (self.pending.clone(), self.queued.clone())
    }

    async fn set_gas_price(&self, price: U256) -> bool {
        *self.last_gas_price.lock() = Some(price);
        self.accept_gas_price
    }
}

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

fn tx(nonce: u64, from: Address, value: u64) -> PooledTransaction {
    PooledTransaction {
        actions: vec![Action {
            nonce,
            from,
            to: Some(addr(0x99)),
            value: U256::from(value),
            gas_limit: 21_000,
            payload: Bytes::new(),
        }],
        gas_price: U256::from(1_000_000_000u64),
        hash: Hash::repeat_byte(nonce as u8 ^ (value as u8)),
    }
}

fn reporter(backend: MockBackend) -> (TxPoolRpc, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    let rpc = TxPoolRpc::new(Arc::clone(&backend) as Arc<dyn PoolBackend>);
    (rpc, backend)
}

#[tokio::test]
async fn status_mirrors_backend_counts_with_exactly_two_keys() {
    let (rpc, _) = reporter(MockBackend {
        stats: (3, 0),
        ..MockBackend::empty()
    });

    let status = rpc.status().await;
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(json, serde_json::json!({"pending": 3, "queued": 0}));
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn content_always_carries_both_categories() {
    let (rpc, _) = reporter(MockBackend::empty());

    let json = serde_json::to_value(rpc.content().await).unwrap();
    assert_eq!(json, serde_json::json!({"pending": {}, "queued": {}}));
}

#[tokio::test]
async fn content_places_every_transaction_under_its_category_and_nonce() {
    let alice = addr(0xaa);
    let bob = addr(0xbb);

    let mut backend = MockBackend::empty();
    backend
        .pending
        .insert(alice, vec![tx(0, alice, 10), tx(1, alice, 20)]);
    backend.pending.insert(bob, vec![tx(4, bob, 30)]);
    backend.queued.insert(bob, vec![tx(9, bob, 40)]);
    let (rpc, _) = reporter(backend);

    let content = rpc.content().await;
    let alice_key = format!("{:#x}", alice);
    let bob_key = format!("{:#x}", bob);

    assert_eq!(content.pending[&alice_key].len(), 2);
    assert_eq!(content.pending[&alice_key]["0"].actions[0].nonce, 0);
    assert_eq!(content.pending[&alice_key]["1"].actions[0].nonce, 1);
    assert_eq!(content.pending[&bob_key]["4"].actions[0].nonce, 4);
    assert_eq!(content.queued[&bob_key]["9"].actions[0].nonce, 9);
    assert!(!content.queued.contains_key(&alice_key));
}

#[tokio::test]
async fn content_records_are_unmined() {
    let alice = addr(0xaa);
    let mut backend = MockBackend::empty();
    backend.pending.insert(alice, vec![tx(5, alice, 10)]);
    let (rpc, _) = reporter(backend);

    let content = rpc.content().await;
    let record = &content.pending[&format!("{:#x}", alice)]["5"];
    assert_eq!(record.block_hash, Hash::zero());
    assert_eq!(record.block_number, 0);
    assert_eq!(record.transaction_index, 0);
}

#[tokio::test]
async fn content_is_idempotent_against_unchanged_backend() {
    let alice = addr(0xaa);
    let bob = addr(0xbb);
    let mut backend = MockBackend::empty();
    backend
        .pending
        .insert(alice, vec![tx(0, alice, 10), tx(1, alice, 20)]);
    backend.queued.insert(bob, vec![tx(7, bob, 30)]);
    let (rpc, _) = reporter(backend);

    let first = serde_json::to_string(&rpc.content().await).unwrap();
    let second = serde_json::to_string(&rpc.content().await).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn duplicate_nonce_keeps_the_later_transaction() {
    // The backend contract says first-action nonces are distinct per
    // sender; if that is ever violated the later entry wins the slot.
    let alice = addr(0xaa);
    let earlier = tx(5, alice, 1);
    let later = tx(5, alice, 2);

    let mut backend = MockBackend::empty();
    backend
        .pending
        .insert(alice, vec![earlier, later.clone()]);
    let (rpc, _) = reporter(backend);

    let content = rpc.content().await;
    let by_nonce = &content.pending[&format!("{:#x}", alice)];
    assert_eq!(by_nonce.len(), 1);
    assert_eq!(
        by_nonce["5"],
        later.to_rpc_transaction(Hash::zero(), 0, 0)
    );
}

#[tokio::test]
async fn scenario_single_pending_transaction() {
    let alice = addr(0xaa);
    let t = tx(5, alice, 10);
    let mut backend = MockBackend::empty();
    backend.pending.insert(alice, vec![t.clone()]);
    let (rpc, _) = reporter(backend);

    let json = serde_json::to_value(rpc.content().await).unwrap();
    let expected = serde_json::json!({
        "pending": {
            format!("{:#x}", alice): {
                "5": serde_json::to_value(t.to_rpc_transaction(Hash::zero(), 0, 0)).unwrap()
            }
        },
        "queued": {}
    });
    assert_eq!(json, expected);
}

#[tokio::test]
async fn inspect_shares_the_content_key_structure() {
    let alice = addr(0xaa);
    let mut backend = MockBackend::empty();
    backend.pending.insert(alice, vec![tx(5, alice, 10)]);
    let (rpc, _) = reporter(backend);

    let inspect = rpc.inspect().await;
    let alice_key = format!("{:#x}", alice);
    assert!(inspect.pending[&alice_key].contains_key("5"));
    assert!(inspect.queued.is_empty());
    assert!(inspect.pending[&alice_key]["5"].contains("21000 gas"));
}

#[tokio::test]
async fn set_gas_price_forwards_value_unchanged() {
    let (rpc, backend) = reporter(MockBackend::empty());

    assert!(rpc.set_gas_price(U256::from(1_000_000_000u64)).await);
    assert_eq!(
        *backend.last_gas_price.lock(),
        Some(U256::from(1_000_000_000u64))
    );
}

#[tokio::test]
async fn set_gas_price_accepts_zero_and_very_large_values() {
    let (rpc, backend) = reporter(MockBackend::empty());

    assert!(rpc.set_gas_price(U256::ZERO).await);
    assert_eq!(*backend.last_gas_price.lock(), Some(U256::ZERO));

    // Larger than any u128.
    let huge = U256::from_dec_str("1606938044258990275541962092341162602522202993782792835301376")
        .unwrap();
    assert!(rpc.set_gas_price(huge).await);
    assert_eq!(*backend.last_gas_price.lock(), Some(huge));
}

#[tokio::test]
async fn set_gas_price_relays_rejection() {
    let (rpc, backend) = reporter(MockBackend {
        accept_gas_price: false,
        ..MockBackend::empty()
    });

    assert!(!rpc.set_gas_price(U256::from(1u64)).await);
    assert_eq!(*backend.last_gas_price.lock(), Some(U256::from(1u64)));
}
