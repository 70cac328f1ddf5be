//! MCP resource implementations.

pub mod menu;
pub mod registry;
pub mod templates;

pub use registry::ResourceRegistry;
