//! Newline-delimited JSON framing.

use crate::types::{JsonRpcMessage, McpError, McpResult, RequestId};

/// Parse one line of input as a JSON-RPC message.
pub fn parse_message(line: &str) -> McpResult<JsonRpcMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("Empty message".to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))
}

/// Serialize a value to a single line with a trailing newline.
pub fn frame_message(value: &serde_json::Value) -> McpResult<String> {
    let mut json = serde_json::to_string(value).map_err(McpError::Json)?;
    json.push('\n');
    Ok(json)
}

/// Error envelope for input that could not be decoded, so the id is unknown.
pub fn parse_error_response(err: &McpError) -> McpResult<serde_json::Value> {
    serde_json::to_value(err.to_reply(RequestId::Null))
        .map_err(|e| McpError::InternalError(e.to_string()))
}
