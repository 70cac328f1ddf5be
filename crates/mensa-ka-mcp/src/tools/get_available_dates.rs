//! Tool: get_available_dates — List dates with a published menu.

use serde_json::{json, Value};

use mensa_ka::MenuSource;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub const NAME: &str = "get_available_dates";

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: Some("Get available dates".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        output_schema: Some(json!({
            "type": "object",
            "properties": {
                "available_dates": {
                    "type": "array",
                    "items": { "type": "string", "format": "date" },
                    "description": "Dates with a published menu (YYYY-MM-DD), in listing order"
                }
            },
            "required": ["available_dates"]
        })),
    }
}

pub async fn execute(_args: Value, source: &dyn MenuSource) -> McpResult<ToolCallResult> {
    let dates = match source.available_dates().await {
        Ok(dates) => dates,
        Err(e) => {
            tracing::warn!("{NAME} failed: {e}");
            return Ok(ToolCallResult::error(format!(
                "error fetching available dates: {e}"
            )));
        }
    };

    let dates: Vec<String> = dates.iter().map(ToString::to_string).collect();
    let summary = format!("Available dates: {}", dates.join(", "));

    Ok(ToolCallResult::structured(
        json!({ "available_dates": dates }),
        summary,
    ))
}
