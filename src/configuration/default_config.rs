use super::FormatterConfig;
use super::OperatorPosition;
use super::OverrideOptions;
use super::OverrideRule;

/// The configuration record this repository ships.
///
/// The two overrides exist because the formatter otherwise infers the
/// parser from the file extension alone:
///
/// - `.vscode/*.json`, `tsconfig.json`, and `tsconfig.*.json` permit
///   comments and trailing commas in practice, so they must be parsed
///   with the comments-tolerant JSON parser rather than the strict
///   default.
/// - `.bash_profile_remote` has no extension to infer its syntax from,
///   so its parser is pinned explicitly.
///
/// The operator position is the single deliberate departure from the
/// tool defaults, chosen for readability when expressions wrap.
pub fn default_config() -> FormatterConfig {
  FormatterConfig {
    plugins: vec![
      // the tool does not format package manifests by default
      String::from("prettier-plugin-packagejson"),
      // the tool does not format shell scripts by default
      String::from("prettier-plugin-sh"),
    ],
    overrides: vec![
      OverrideRule {
        files: vec![
          String::from("**/.vscode/*.json"),
          String::from("**/tsconfig.json"),
          String::from("**/tsconfig.*.json"),
        ],
        options: OverrideOptions {
          parser: String::from("jsonc"),
        },
      },
      OverrideRule {
        files: vec![String::from(".bash_profile_remote")],
        options: OverrideOptions {
          parser: String::from("sh"),
        },
      },
    ],
    experimental_operator_position: OperatorPosition::Start,
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::configuration::deserialize_config;
  use crate::configuration::serialize_config;

  #[test]
  fn it_should_load_exactly_two_plugins_in_order() {
    let config = default_config();
    assert_eq!(config.plugins, vec!["prettier-plugin-packagejson", "prettier-plugin-sh"]);
    assert!(config.plugins.iter().all(|plugin| !plugin.is_empty()));
  }

  #[test]
  fn it_should_declare_the_two_override_rules_in_order() {
    let config = default_config();
    assert_eq!(config.overrides.len(), 2);
    assert_eq!(config.overrides[0].files.len(), 3);
    assert_eq!(config.overrides[0].options.parser, "jsonc");
    assert_eq!(config.overrides[1].files, vec![".bash_profile_remote"]);
    assert_eq!(config.overrides[1].options.parser, "sh");
    for rule in &config.overrides {
      assert!(!rule.files.is_empty());
      assert!(rule.files.iter().all(|pattern| !pattern.is_empty()));
    }
  }

  #[test]
  fn it_should_place_operators_at_line_starts() {
    assert_eq!(default_config().experimental_operator_position, OperatorPosition::Start);
  }

  #[test]
  fn it_should_round_trip_through_serialization() {
    let config = default_config();
    let text = serialize_config(&config).unwrap();
    let result = deserialize_config(&text).unwrap();
    assert_eq!(result.config, config);
    assert_eq!(result.diagnostics, Vec::new());
  }
}
