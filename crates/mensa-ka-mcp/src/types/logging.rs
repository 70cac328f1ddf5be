//! MCP log levels and their mapping onto tracing filters.

use serde::{Deserialize, Serialize};

/// Severity a client may request with `logging/setLevel` (syslog names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Notice => "notice",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Alert => "alert",
            LogLevel::Emergency => "emergency",
        }
    }

    /// `EnvFilter` directive with the closest tracing level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info | LogLevel::Notice => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let level: LogLevel = serde_json::from_value(serde_json::json!("warning")).unwrap();
        assert_eq!(level, LogLevel::Warning);
        assert_eq!(level.to_string(), "warning");
        assert!(serde_json::from_value::<LogLevel>(serde_json::json!("verbose")).is_err());
        assert!(serde_json::from_value::<LogLevel>(serde_json::json!("WARN")).is_err());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Debug.filter_directive(), "debug");
        assert_eq!(LogLevel::Notice.filter_directive(), "info");
        assert_eq!(LogLevel::Warning.filter_directive(), "warn");
        assert_eq!(LogLevel::Emergency.filter_directive(), "error");
    }
}
