//! MCP data types used by the server.

pub mod capabilities;
pub mod error;
pub mod logging;
pub mod message;
pub mod params;
pub mod response;

pub use capabilities::*;
pub use error::*;
pub use logging::*;
pub use message::*;
pub use params::*;
pub use response::*;
