//! Mensa KA — discovery and retrieval of the Mensa Karlsruhe daily menu feed.

pub mod fetch;
pub mod listing;
pub mod source;
pub mod types;

pub use listing::{extract_file_links, parse_listing};
pub use source::{HttpMenuSource, MenuSource, DEFAULT_ORIGIN};
pub use types::*;
