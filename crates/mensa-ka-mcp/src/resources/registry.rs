//! Resource registration and dispatch.

use mensa_ka::MenuSource;

use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};

use super::{menu, templates};

pub struct ResourceRegistry;

impl ResourceRegistry {
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        templates::list_templates()
    }

    pub fn list_resources() -> Vec<ResourceDefinition> {
        templates::list_resources()
    }

    /// Resolve `uri` and read it. Date validation happens before any fetch.
    pub async fn read(uri: &str, source: &dyn MenuSource) -> McpResult<ReadResourceResult> {
        if let Some(date_text) = uri.strip_prefix(menu::MENU_URI_PREFIX) {
            let date = menu::parse_menu_date(date_text)?;
            menu::read_menu(uri, date, source).await
        } else {
            Err(McpError::ResourceNotFound(uri.to_string()))
        }
    }
}
