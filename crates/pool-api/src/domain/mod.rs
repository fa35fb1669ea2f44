//! Domain types for the pool API: response shapes, errors, configuration.

pub mod config;
pub mod content;
pub mod error;

pub use config::{ConfigError, RpcConfig};
pub use content::{AccountContent, AccountSummaries, PoolContent, PoolInspect, PoolStatus};
pub use error::{ApiError, ApiResult, ServerError};
