//! Resource: mensa-ka://menu/{date}

use mensa_ka::{MenuDate, MenuSource};

use crate::types::{McpError, McpResult, ReadResourceResult, ResourceContent};

pub const MENU_URI_PREFIX: &str = "mensa-ka://menu/";
pub const MENU_URI_TEMPLATE: &str = "mensa-ka://menu/{date}";
pub const MENU_MIME_TYPE: &str = "application/json";

/// Parse the date text that follows the menu URI prefix.
pub fn parse_menu_date(date_text: &str) -> McpResult<MenuDate> {
    MenuDate::parse(date_text).map_err(|_| McpError::InvalidDate)
}

pub async fn read_menu(
    uri: &str,
    date: MenuDate,
    source: &dyn MenuSource,
) -> McpResult<ReadResourceResult> {
    let menu = source
        .menu_for_date(date)
        .await
        .map_err(|e| McpError::MenuUnavailable(format!("error fetching menu: {e}")))?;

    let text = serde_json::to_string(&menu).map_err(|e| {
        McpError::MenuUnavailable(format!("error marshalling menu to JSON: {e}"))
    })?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent {
            uri: uri.to_string(),
            mime_type: Some(MENU_MIME_TYPE.to_string()),
            text: Some(text),
        }],
    })
}
