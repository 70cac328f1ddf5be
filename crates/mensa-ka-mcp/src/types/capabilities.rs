//! Server identity and the capabilities announced from `initialize`.

use serde::{Deserialize, Serialize};

pub const MCP_VERSION: &str = "2025-06-18";
pub const SERVER_NAME: &str = "mensa-ka-mcp";
pub const SERVER_TITLE: &str = "Mensa Karlsruhe";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "Mensa Karlsruhe MCP server exposes the daily cafeteria menu. \
    Call get_available_dates to see which dates have a published menu, \
    then read mensa-ka://menu/{date} (YYYY-MM-DD) for that day's menu.";

/// Name and version of either side of the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Implementation {
    pub fn server() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            title: Some(SERVER_TITLE.to_string()),
        }
    }
}

/// A capability with no options. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Enabled {}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCapability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<bool>,
    pub list_changed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    pub logging: Enabled,
    pub resources: ListCapability,
    pub tools: ListCapability,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            logging: Enabled {},
            resources: ListCapability {
                subscribe: Some(false),
                list_changed: true,
            },
            tools: ListCapability {
                subscribe: None,
                list_changed: true,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: Implementation,
    pub instructions: String,
}

impl InitializeResult {
    /// The answer this server gives every client, whatever version it asked for.
    pub fn for_server() -> Self {
        Self {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities::default(),
            server_info: Implementation::server(),
            instructions: INSTRUCTIONS.to_string(),
        }
    }
}
