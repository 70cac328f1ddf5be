//! HTTP transport — JSON-RPC over POST plus a /health check.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::protocol::ProtocolHandler;
use crate::types::{error_codes, JsonRpcError, JsonRpcMessage, McpError, McpResult, RequestId};

/// Path the MCP endpoint is mounted on.
pub const ENDPOINT_PATH: &str = "/api/v1/mcp";

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// HTTP transport for networked MCP clients.
pub struct HttpTransport {
    handler: Arc<ProtocolHandler>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(ENDPOINT_PATH, post(handle_request))
            .route("/health", get(handle_health))
            .layer(CorsLayer::permissive())
            .with_state(self.handler.clone())
    }

    /// Bind `addr` and serve until the process exits.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(&self, listener: tokio::net::TcpListener) -> McpResult<()> {
        if let Ok(local) = listener.local_addr() {
            tracing::info!("HTTP transport listening on {local}{ENDPOINT_PATH}");
        }

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))
    }
}

async fn handle_request(
    State(handler): State<Arc<ProtocolHandler>>,
    AxumJson(body): AxumJson<serde_json::Value>,
) -> Response {
    let msg: JsonRpcMessage = match serde_json::from_value(body) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Parse error: {e}");
            let error = JsonRpcError::failure(RequestId::Null, error_codes::PARSE_ERROR, "Parse error");
            return (StatusCode::BAD_REQUEST, AxumJson(error)).into_response();
        }
    };

    match handler.handle_message(msg).await {
        Some(response) => AxumJson(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_health() -> AxumJson<serde_json::Value> {
    AxumJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
