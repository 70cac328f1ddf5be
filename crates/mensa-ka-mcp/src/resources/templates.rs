//! Resource URI templates and static resource definitions.

use crate::types::{ResourceDefinition, ResourceTemplateDefinition};

use super::menu::{MENU_MIME_TYPE, MENU_URI_TEMPLATE};

pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
    vec![ResourceTemplateDefinition {
        uri_template: MENU_URI_TEMPLATE.to_string(),
        name: "Mensa Menu".to_string(),
        description: Some("Mensa menu for a specific date".to_string()),
        mime_type: Some(MENU_MIME_TYPE.to_string()),
    }]
}

/// Menus are only reachable through the template.
pub fn list_resources() -> Vec<ResourceDefinition> {
    Vec::new()
}
