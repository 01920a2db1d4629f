use std::env;

use anyhow::{Context, Result};

/// Environment variable overriding the largest export file accepted
pub const MAX_EXPORT_BYTES_VAR: &str = "CHAT_HISTORY_MAX_BYTES";

// Maximum export size: 16MB
pub const DEFAULT_MAX_EXPORT_BYTES: u64 = 16 * 1024 * 1024;

/// Largest export file accepted, from `CHAT_HISTORY_MAX_BYTES` or the 16MB default
pub fn max_export_bytes() -> Result<u64> {
    max_export_bytes_from(env::var(MAX_EXPORT_BYTES_VAR).ok().as_deref())
}

/// Internal helper taking the raw variable value (for testing)
pub(crate) fn max_export_bytes_from(value: Option<&str>) -> Result<u64> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_MAX_EXPORT_BYTES),
        Some(raw) => raw.parse::<u64>().with_context(|| {
            format!("{} must be a byte count, got '{}'", MAX_EXPORT_BYTES_VAR, raw)
        }),
    }
}
