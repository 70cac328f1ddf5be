//! Mensa KA MCP Server — daily cafeteria menus for LLM agents.

pub mod config;
pub mod protocol;
pub mod resources;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::resolve_origin;
pub use protocol::ProtocolHandler;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::StdioTransport;
