//! MCP tool implementations.

pub mod get_available_dates;
pub mod registry;

pub use registry::ToolRegistry;
