//! # Pool API
//!
//! Read/control JSON-RPC surface over a node's transaction pool.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   POOL API                       │
//! ├──────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────┐  │
//! │  │        HTTP JSON-RPC (RpcServer)           │  │
//! │  │  txpool_status / txpool_content            │  │
//! │  │  txpool_inspect / txpool_setGasPrice       │  │
//! │  └────────────────────┬───────────────────────┘  │
//! │                       │                          │
//! │  ┌────────────────────┴───────────────────────┐  │
//! │  │           TxPoolRpc (reporter)             │  │
//! │  │   flattens pool snapshots into the stable  │  │
//! │  │   category → account → nonce shape         │  │
//! │  └────────────────────┬───────────────────────┘  │
//! └───────────────────────┼──────────────────────────┘
//!                         │
//!                 dyn PoolBackend
//!                         │
//!            transaction pool (external)
//! ```
//!
//! The reporter holds no pool state of its own. Every operation is a
//! single-shot request/response adapter: it calls the backend, reshapes the
//! result and returns it. `txpool_setGasPrice` is the only mutation and it
//! is delegated entirely to the backend.
//!
//! # Usage
//!
//! ```ignore
//! use pool_api::{RpcConfig, RpcServer};
//!
//! let mut server = RpcServer::new(RpcConfig::default(), backend)?;
//! server.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod rpc;
pub mod service;

// Re-exports for public API
pub use domain::config::RpcConfig;
pub use domain::content::{PoolContent, PoolInspect, PoolStatus};
pub use domain::error::{ApiError, ApiResult, ServerError};
pub use ports::{AccountPool, PoolBackend};
pub use rpc::TxPoolRpc;
pub use service::RpcServer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
