//! HTTP JSON-RPC service exposing the txpool namespace.
//!
//! The service is the dispatch layer: it parses JSON-RPC 2.0 envelopes,
//! routes `txpool_*` methods to the reporter and serializes the results.
//! Requests are independent; nothing here blocks one call on another.

use crate::domain::config::RpcConfig;
use crate::domain::error::{ApiError, ServerError};
use crate::ports::PoolBackend;
use crate::rpc::TxPoolRpc;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info};

/// JSON-RPC server for the pool API
pub struct RpcServer {
    config: RpcConfig,
    txpool: Arc<TxPoolRpc>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl RpcServer {
    /// Create a new server over the given pool backend
    pub fn new(config: RpcConfig, backend: Arc<dyn PoolBackend>) -> Result<Self, ServerError> {
        config
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            txpool: Arc::new(TxPoolRpc::new(backend)),
            config,
            shutdown_tx: None,
        })
    }

    /// Start serving until shutdown is requested
    pub async fn start(&mut self) -> Result<(), ServerError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let addr = self.config.addr();
        if !self.config.enabled {
            info!("RPC server disabled by configuration");
            return Ok(());
        }

        info!(addr = %addr, "Starting RPC server");
        let router = self.build_router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            error!(error = %e, "RPC server error");
            return Err(ServerError::Internal(e.to_string()));
        }

        info!("RPC server stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    fn build_router(&self) -> Router {
        let state = AppState {
            txpool: Arc::clone(&self.txpool),
            max_batch_size: self.config.max_batch_size,
        };

        Router::new()
            .route("/", post(handle_json_rpc))
            .route("/health", get(health_check))
            .layer(DefaultBodyLimit::max(self.config.max_request_size))
            .with_state(state)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    txpool: Arc<TxPoolRpc>,
    max_batch_size: usize,
}

/// Handle a JSON-RPC request, single or batch
async fn handle_json_rpc(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let request: serde_json::Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_envelope(
                    serde_json::Value::Null,
                    ApiError::parse_error(e.to_string()),
                )),
            );
        }
    };

    let response = if let Some(requests) = request.as_array() {
        if requests.len() > state.max_batch_size {
            return (
                StatusCode::OK,
                Json(error_envelope(
                    serde_json::Value::Null,
                    ApiError::invalid_request(format!(
                        "batch too large (max {})",
                        state.max_batch_size
                    )),
                )),
            );
        }

        let mut responses = Vec::with_capacity(requests.len());
        for req in requests {
            responses.push(process_single_request(&state, req).await);
        }
        serde_json::Value::Array(responses)
    } else {
        process_single_request(&state, &request).await
    };

    (StatusCode::OK, Json(response))
}

/// Process a single JSON-RPC request
async fn process_single_request(
    state: &AppState,
    request: &serde_json::Value,
) -> serde_json::Value {
    let id = request
        .get("id")
        .cloned()
        .unwrap_or(serde_json::Value::Null);

    // Notifications are not supported; an id must accompany every call.
    if id.is_null() {
        return error_envelope(
            serde_json::Value::Null,
            ApiError::invalid_request("missing id (notifications not supported)"),
        );
    }
    if !id.is_string() && !id.is_number() {
        return error_envelope(
            serde_json::Value::Null,
            ApiError::invalid_request("id must be string or number"),
        );
    }

    let method = request.get("method").and_then(|m| m.as_str()).unwrap_or("");
    let params = request.get("params");

    match route_method(state, method, params).await {
        Ok(value) => serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": value
        }),
        Err(e) => error_envelope(id, e),
    }
}

/// Route a JSON-RPC method to the reporter
async fn route_method(
    state: &AppState,
    method: &str,
    params: Option<&serde_json::Value>,
) -> Result<serde_json::Value, ApiError> {
    match method {
        "txpool_status" => {
            let status = state.txpool.status().await;
            Ok(serde_json::to_value(status).unwrap_or_default())
        }

        "txpool_content" => {
            let content = state.txpool.content().await;
            Ok(serde_json::to_value(content).unwrap_or_default())
        }

        "txpool_inspect" => {
            let inspect = state.txpool.inspect().await;
            Ok(serde_json::to_value(inspect).unwrap_or_default())
        }

        "txpool_setGasPrice" => {
            let price: pool_types::U256 = parse_param(params, 0)?;
            let accepted = state.txpool.set_gas_price(price).await;
            Ok(serde_json::json!(accepted))
        }

        _ => Err(ApiError::method_not_found(method)),
    }
}

/// Parse a required parameter from a JSON-RPC params array
fn parse_param<T: serde::de::DeserializeOwned>(
    params: Option<&serde_json::Value>,
    index: usize,
) -> Result<T, ApiError> {
    let param = params
        .and_then(|p| {
            if p.is_array() {
                p.get(index)
            } else if index == 0 {
                Some(p)
            } else {
                None
            }
        })
        .ok_or_else(|| ApiError::invalid_params(format!("missing parameter at index {}", index)))?;

    serde_json::from_value(param.clone()).map_err(|e| {
        ApiError::invalid_params(format!("invalid parameter at index {}: {}", index, e))
    })
}

/// JSON-RPC 2.0 error envelope
fn error_envelope(id: serde_json::Value, error: ApiError) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": error.code,
            "message": error.message
        }
    })
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pool-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
