use anyhow::Result;

use super::FormatterConfig;

/// Serializes the configuration record to pretty-printed JSON, preserving
/// the order of `plugins` and `overrides`.
pub fn serialize_config(config: &FormatterConfig) -> Result<String> {
  Ok(serde_json::to_string_pretty(config)?)
}
