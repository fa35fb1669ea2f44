//! Ports connecting the pool API to the rest of the node.

pub mod outbound;

pub use outbound::{AccountPool, PoolBackend};
