//! # Shared Pool Types
//!
//! Primitives and transaction types shared across the pool API surface.
//!
//! ## Clusters
//!
//! - **Primitives**: [`U256`], [`Bytes`], [`Address`], [`Hash`]
//! - **Transactions**: [`Action`], [`PooledTransaction`] and their external
//!   view [`RpcAction`], [`RpcTransaction`]

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod primitives;
pub mod transaction;

pub use primitives::{Address, Bytes, Hash, U256};
pub use transaction::{Action, PooledTransaction, RpcAction, RpcTransaction};
