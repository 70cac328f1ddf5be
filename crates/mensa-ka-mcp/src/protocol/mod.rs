//! MCP protocol handling: JSON-RPC dispatch, handshake state, and request validation.

pub mod handler;
pub mod session;
pub mod validator;

pub use handler::{LevelHook, ProtocolHandler};
