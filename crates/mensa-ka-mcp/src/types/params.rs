//! Typed `params` for the methods the server answers.
//!
//! Unknown fields are ignored, so clients may send more than is modelled here.

use serde::Deserialize;
use serde_json::Value;

use super::capabilities::Implementation;
use super::logging::LogLevel;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub client_info: Implementation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceReadParams {
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetLevelParams {
    pub level: LogLevel,
}
