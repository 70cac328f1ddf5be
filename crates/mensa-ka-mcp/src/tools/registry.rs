//! Tool registration and dispatch.

use serde_json::Value;

use mensa_ka::MenuSource;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::get_available_dates;

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![get_available_dates::definition()]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        source: &dyn MenuSource,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            get_available_dates::NAME => get_available_dates::execute(args, source).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}
