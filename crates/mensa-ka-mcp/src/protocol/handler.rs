//! Request dispatcher: decodes params, routes to tools and resources, and
//! wraps every outcome in a JSON-RPC envelope.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use mensa_ka::MenuSource;

use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::session::{Phase, Session};
use super::validator::validate_request;

/// Applies a level requested through `logging/setLevel` to the process's logger.
pub type LevelHook = Arc<dyn Fn(LogLevel) + Send + Sync>;

/// Methods the server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Initialize,
    Ping,
    Shutdown,
    ListTools,
    CallTool,
    ListResources,
    ListResourceTemplates,
    ReadResource,
    SetLogLevel,
}

impl Method {
    fn from_name(name: &str) -> Option<Self> {
        let method = match name {
            "initialize" => Method::Initialize,
            "ping" => Method::Ping,
            "shutdown" => Method::Shutdown,
            "tools/list" => Method::ListTools,
            "tools/call" => Method::CallTool,
            "resources/list" => Method::ListResources,
            "resources/templates/list" => Method::ListResourceTemplates,
            "resources/read" => Method::ReadResource,
            "logging/setLevel" => Method::SetLogLevel,
            _ => return None,
        };
        Some(method)
    }

    fn reaches_origin(self) -> bool {
        matches!(self, Method::CallTool | Method::ReadResource)
    }
}

/// Dispatches incoming JSON-RPC messages to tools and resources.
///
/// Only the handshake state is locked, and never across a fetch, so
/// concurrent requests do not wait on each other.
pub struct ProtocolHandler {
    source: Arc<dyn MenuSource>,
    session: Mutex<Session>,
    level_hook: Option<LevelHook>,
}

impl ProtocolHandler {
    pub fn new(source: Arc<dyn MenuSource>) -> Self {
        Self {
            source,
            session: Mutex::new(Session::default()),
            level_hook: None,
        }
    }

    /// Forward `logging/setLevel` requests to `hook`.
    pub fn with_level_hook(mut self, hook: LevelHook) -> Self {
        self.level_hook = Some(hook);
        self
    }

    /// Handle one inbound message. Returns the reply, or `None` for
    /// notifications and stray client replies.
    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(request) => Some(self.handle_request(request).await),
            JsonRpcMessage::Notification(notification) => {
                self.handle_notification(&notification.method).await;
                None
            }
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => {
                tracing::debug!("Ignoring reply from client: the server sends no requests");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let outcome = match validate_request(&request) {
            Ok(()) => self.dispatch(&request.method, request.params).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => envelope(JsonRpcResponse::success(request.id, result)),
            Err(e) => {
                let session = self.session.lock().await;
                tracing::warn!(
                    "{} (id {}) from {} failed: {e}",
                    request.method,
                    request.id,
                    session.client_name()
                );
                envelope(e.to_reply(request.id))
            }
        }
    }

    async fn dispatch(&self, name: &str, params: Option<Value>) -> McpResult<Value> {
        let method =
            Method::from_name(name).ok_or_else(|| McpError::MethodNotFound(name.to_string()))?;

        if method.reaches_origin() && self.session.lock().await.phase() != Phase::Ready {
            tracing::debug!("{name} received before the handshake completed");
        }

        match method {
            Method::Initialize => {
                let params: InitializeParams = required(name, params)?;
                let result = self.session.lock().await.initialize(params);
                to_result(result)
            }
            Method::Ping => Ok(empty_object()),
            Method::Shutdown => {
                tracing::info!("Shutdown requested");
                Ok(empty_object())
            }
            Method::ListTools => to_result(ToolListResult {
                tools: ToolRegistry::list_tools(),
                next_cursor: None,
            }),
            Method::CallTool => {
                let call: ToolCallParams = required(name, params)?;
                let result =
                    ToolRegistry::call(&call.name, call.arguments, self.source.as_ref()).await?;
                to_result(result)
            }
            Method::ListResources => to_result(ResourceListResult {
                resources: ResourceRegistry::list_resources(),
                next_cursor: None,
            }),
            Method::ListResourceTemplates => to_result(ResourceTemplateListResult {
                resource_templates: ResourceRegistry::list_templates(),
                next_cursor: None,
            }),
            Method::ReadResource => {
                let read: ResourceReadParams = required(name, params)?;
                to_result(ResourceRegistry::read(&read.uri, self.source.as_ref()).await?)
            }
            Method::SetLogLevel => {
                let SetLevelParams { level } = required(name, params)?;
                tracing::info!("Client set log level to {level}");
                if let Some(hook) = &self.level_hook {
                    hook(level);
                }
                Ok(empty_object())
            }
        }
    }

    async fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" | "initialized" => self.session.lock().await.mark_ready(),
            "notifications/cancelled" => {
                tracing::debug!("Cancellation received; requests run to completion")
            }
            other => tracing::debug!("Unknown notification: {other}"),
        }
    }
}

/// Decode the params a method cannot do without.
fn required<T: DeserializeOwned>(method: &str, params: Option<Value>) -> McpResult<T> {
    let params =
        params.ok_or_else(|| McpError::InvalidParams(format!("{method} requires params")))?;
    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn to_result<T: Serialize>(result: T) -> McpResult<Value> {
    serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn envelope<T: Serialize>(message: T) -> Value {
    serde_json::to_value(message).unwrap_or(Value::Null)
}
