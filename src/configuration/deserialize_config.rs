use anyhow::Result;
use anyhow::bail;
use jsonc_parser::ParseOptions;
use serde_json::Value;

use super::ConfigurationDiagnostic;
use super::FormatterConfig;
use super::OperatorPosition;
use super::OverrideOptions;
use super::OverrideRule;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DeserializeConfigResult {
  pub config: FormatterConfig,
  /// Problems that do not prevent loading the configuration. The caller
  /// decides whether to report or reject.
  pub diagnostics: Vec<ConfigurationDiagnostic>,
}

/// Deserializes the configuration file text to a typed record.
///
/// The file is JSONC, so comments and trailing commas are tolerated.
/// Structural problems (wrong root, wrong value types) error; unknown
/// properties and unrecognized enumerated values produce diagnostics.
pub fn deserialize_config(config_file_text: &str) -> Result<DeserializeConfigResult> {
  let value = jsonc_parser::parse_to_serde_value(config_file_text, &ParseOptions::default())?;
  let root_object = match value {
    Some(Value::Object(obj)) => obj,
    _ => bail!("Expected a root object in the json"),
  };

  let mut config = FormatterConfig::default();
  let mut diagnostics = Vec::new();

  for (key, value) in root_object {
    match key.as_str() {
      // ignore $schema property
      "$schema" => {}
      "plugins" => config.plugins = take_string_array(&key, value)?,
      "overrides" => config.overrides = take_override_rules(value, &mut diagnostics)?,
      "experimentalOperatorPosition" => {
        let Value::String(text) = value else {
          bail!("Expected a string in root object property '{}'", key);
        };
        match text.parse::<OperatorPosition>() {
          Ok(position) => config.experimental_operator_position = position,
          Err(err) => diagnostics.push(ConfigurationDiagnostic {
            property_name: key.clone(),
            message: err.to_string(),
          }),
        }
      }
      _ => diagnostics.push(ConfigurationDiagnostic {
        property_name: key.clone(),
        message: format!("Unknown property in configuration: {}", key),
      }),
    }
  }

  Ok(DeserializeConfigResult { config, diagnostics })
}

fn take_string_array(parent_prop_name: &str, value: Value) -> Result<Vec<String>> {
  let Value::Array(elements) = value else {
    bail!("Expected an array in property '{}'", parent_prop_name);
  };
  let mut result = Vec::with_capacity(elements.len());
  for element in elements {
    match element {
      Value::String(text) => result.push(text),
      _ => bail!("Expected a string in array '{}'", parent_prop_name),
    }
  }
  Ok(result)
}

fn take_override_rules(value: Value, diagnostics: &mut Vec<ConfigurationDiagnostic>) -> Result<Vec<OverrideRule>> {
  let Value::Array(elements) = value else {
    bail!("Expected an array in property 'overrides'");
  };
  let mut rules = Vec::with_capacity(elements.len());
  for (index, element) in elements.into_iter().enumerate() {
    let Value::Object(rule_object) = element else {
      bail!("Expected an object in array 'overrides'");
    };
    let mut files = Vec::new();
    let mut parser = None;
    for (key, value) in rule_object {
      match key.as_str() {
        "files" => files = take_string_array(&format!("overrides[{}].files", index), value)?,
        "options" => parser = take_override_options(index, value, diagnostics)?,
        _ => diagnostics.push(ConfigurationDiagnostic {
          property_name: format!("overrides[{}].{}", index, key),
          message: format!("Unknown property in configuration: {}", key),
        }),
      }
    }
    if files.is_empty() {
      bail!("Expected a non-empty 'files' array in overrides entry {}", index);
    }
    let Some(parser) = parser else {
      bail!("Expected a 'parser' option in overrides entry {}", index);
    };
    rules.push(OverrideRule {
      files,
      options: OverrideOptions { parser },
    });
  }
  Ok(rules)
}

fn take_override_options(
  rule_index: usize,
  value: Value,
  diagnostics: &mut Vec<ConfigurationDiagnostic>,
) -> Result<Option<String>> {
  let Value::Object(options_object) = value else {
    bail!("Expected an object in property 'overrides[{}].options'", rule_index);
  };
  let mut parser = None;
  for (key, value) in options_object {
    match key.as_str() {
      "parser" => {
        let Value::String(text) = value else {
          bail!("Expected a string in property 'overrides[{}].options.parser'", rule_index);
        };
        parser = Some(text);
      }
      _ => diagnostics.push(ConfigurationDiagnostic {
        property_name: format!("overrides[{}].options.{}", rule_index, key),
        message: format!("Unknown property in configuration: {}", key),
      }),
    }
  }
  Ok(parser)
}
