use super::ConfigurationDiagnostic;
use super::FormatterConfig;
use crate::plugins::PluginInfo;
use crate::resolution::is_known_parser;

/// Structurally verifies a configuration record.
///
/// This checks the contract the external tool expects: non-empty plugin
/// identifiers, non-empty override patterns, and parser names the tool
/// or one of the provided plugins recognizes. Whether a plugin identifier
/// actually resolves is left to the tool's plugin loader.
pub fn verify_config(config: &FormatterConfig, plugins: &[PluginInfo]) -> Vec<ConfigurationDiagnostic> {
  let mut diagnostics = Vec::new();

  for (index, plugin) in config.plugins.iter().enumerate() {
    if plugin.is_empty() {
      diagnostics.push(ConfigurationDiagnostic {
        property_name: format!("plugins[{}]", index),
        message: String::from("Expected a non-empty plugin identifier."),
      });
    }
  }

  for (index, rule) in config.overrides.iter().enumerate() {
    if rule.files.is_empty() {
      diagnostics.push(ConfigurationDiagnostic {
        property_name: format!("overrides[{}].files", index),
        message: String::from("Expected a non-empty 'files' array."),
      });
    }
    for (pattern_index, pattern) in rule.files.iter().enumerate() {
      if pattern.is_empty() {
        diagnostics.push(ConfigurationDiagnostic {
          property_name: format!("overrides[{}].files[{}]", index, pattern_index),
          message: String::from("Expected a non-empty file pattern."),
        });
      }
    }
    if !is_known_parser(&rule.options.parser, plugins) {
      diagnostics.push(ConfigurationDiagnostic {
        property_name: format!("overrides[{}].options.parser", index),
        message: format!("Unknown parser: {}", rule.options.parser),
      });
    }
  }

  diagnostics
}
