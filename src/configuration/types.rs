use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfigurationError(pub String);

impl std::error::Error for ParseConfigurationError {}

impl std::fmt::Display for ParseConfigurationError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Found invalid value '{}'.", self.0)
  }
}

macro_rules! generate_str_to_from {
  ($enum_name:ident, $([$member_name:ident, $string_value:expr]),* ) => {
    impl std::str::FromStr for $enum_name {
      type Err = ParseConfigurationError;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($string_value => Ok($enum_name::$member_name)),*,
          _ => Err(ParseConfigurationError(String::from(s))),
        }
      }
    }

    impl std::fmt::Display for $enum_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
          $($enum_name::$member_name => write!(f, "{}", $string_value)),*,
        }
      }
    }
  };
}

/// Where a binary or logical operator lands when an expression wraps
/// across lines.
#[derive(Clone, PartialEq, Eq, Debug, Copy, Serialize, Deserialize)]
pub enum OperatorPosition {
  /// Place the operator at the start of the continuation line.
  #[serde(rename = "start")]
  Start,
  /// Place the operator at the end of the wrapped line (the tool default).
  #[serde(rename = "end")]
  End,
}

generate_str_to_from![OperatorPosition, [Start, "start"], [End, "end"]];

/// Represents a problem within the configuration.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDiagnostic {
  /// The property name the problem occurred on.
  pub property_name: String,
  /// The diagnostic message that should be displayed to the user.
  pub message: String,
}

/// The configuration record the formatter loads once per invocation.
///
/// Values here take precedence over the tool defaults. The record is
/// immutable after construction.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
  /// Plugin identifiers to load, in load order.
  pub plugins: Vec<String>,
  /// Override rules evaluated in order. Later rules take precedence
  /// per-key for files matched by multiple rules.
  pub overrides: Vec<OverrideRule>,
  pub experimental_operator_position: OperatorPosition,
}

impl Default for FormatterConfig {
  fn default() -> Self {
    FormatterConfig {
      plugins: Vec::new(),
      overrides: Vec::new(),
      experimental_operator_position: OperatorPosition::End,
    }
  }
}

/// A (file patterns, options) pair that supersedes default formatting
/// behavior for matching files.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct OverrideRule {
  /// Glob patterns identifying which files the rule applies to.
  pub files: Vec<String>,
  pub options: OverrideOptions,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct OverrideOptions {
  /// Name of the syntax parser to use for matched files.
  pub parser: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn it_should_parse_operator_position_from_str() {
    assert_eq!("start".parse::<OperatorPosition>(), Ok(OperatorPosition::Start));
    assert_eq!("end".parse::<OperatorPosition>(), Ok(OperatorPosition::End));
  }

  #[test]
  fn it_should_error_parsing_unknown_operator_position() {
    let err = "middle".parse::<OperatorPosition>().err().unwrap();
    assert_eq!(err.to_string(), "Found invalid value 'middle'.");
  }

  #[test]
  fn it_should_serialize_operator_position_lowercase() {
    assert_eq!(serde_json::to_string(&OperatorPosition::Start).unwrap(), "\"start\"");
    assert_eq!(serde_json::to_string(&OperatorPosition::End).unwrap(), "\"end\"");
  }

  #[test]
  fn it_should_default_to_operator_position_end() {
    let config = FormatterConfig::default();
    assert_eq!(config.experimental_operator_position, OperatorPosition::End);
    assert!(config.plugins.is_empty());
    assert!(config.overrides.is_empty());
  }
}
