//! RPC method handlers for the JSON-RPC API.

pub mod txpool;

pub use txpool::TxPoolRpc;
