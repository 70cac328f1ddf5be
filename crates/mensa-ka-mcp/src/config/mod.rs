//! Configuration loading and resolution.

use mensa_ka::DEFAULT_ORIGIN;

/// Environment variable that overrides the menu origin.
pub const ORIGIN_ENV: &str = "MENSA_ORIGIN";

/// Resolve the menu origin: explicit flag, then `MENSA_ORIGIN`, then the default.
pub fn resolve_origin(explicit: Option<&str>) -> String {
    if let Some(origin) = explicit {
        return origin.to_string();
    }

    match std::env::var(ORIGIN_ENV) {
        Ok(env_origin) if !env_origin.trim().is_empty() => env_origin.trim().to_string(),
        _ => DEFAULT_ORIGIN.to_string(),
    }
}
