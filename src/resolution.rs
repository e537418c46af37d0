use std::path::Path;

use anyhow::Result;

use crate::configuration::FormatterConfig;
use crate::patterns::GlobMatcher;
use crate::patterns::GlobMatcherOptions;
use crate::plugins::PluginInfo;

/// Parsers the tool itself registers, keyed by file extension.
const PARSERS_BY_EXTENSION: &[(&str, &str)] = &[
  ("cjs", "babel"),
  ("css", "css"),
  ("graphql", "graphql"),
  ("html", "html"),
  ("js", "babel"),
  ("json", "json"),
  ("json5", "json5"),
  ("jsonc", "jsonc"),
  ("jsx", "babel"),
  ("less", "less"),
  ("markdown", "markdown"),
  ("md", "markdown"),
  ("mjs", "babel"),
  ("mts", "typescript"),
  ("scss", "scss"),
  ("ts", "typescript"),
  ("tsx", "typescript"),
  ("yaml", "yaml"),
  ("yml", "yaml"),
];

/// Parser names the tool recognizes without any plugin.
const BUILT_IN_PARSERS: &[&str] = &[
  "babel",
  "css",
  "graphql",
  "html",
  "json",
  "json-stringify",
  "json5",
  "jsonc",
  "less",
  "markdown",
  "scss",
  "typescript",
  "yaml",
];

pub fn is_known_parser(parser_name: &str, plugins: &[PluginInfo]) -> bool {
  BUILT_IN_PARSERS.contains(&parser_name) || plugins.iter().any(|plugin| plugin.parser_name == parser_name)
}

/// How a parser was selected for a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParserResolution {
  /// An override rule pinned the parser.
  Override { rule_index: usize, parser: String },
  /// A plugin association selected the parser.
  Plugin { plugin_name: String, parser: String },
  /// The tool's built-in parser for the file extension.
  Extension { parser: String },
}

impl ParserResolution {
  pub fn parser(&self) -> &str {
    match self {
      ParserResolution::Override { parser, .. } => parser,
      ParserResolution::Plugin { parser, .. } => parser,
      ParserResolution::Extension { parser } => parser,
    }
  }
}

/// Selects the parser the tool would use for project-relative file paths.
///
/// Override rules are evaluated in order and the last matching rule wins.
/// When no rule matches, plugin associations apply (exact file names
/// before extensions), then the tool's own parser-by-extension table.
/// The per-rule glob matchers are built once at construction.
pub struct ParserResolver {
  overrides: Vec<OverrideMatcher>,
  plugins: Vec<PluginInfo>,
}

struct OverrideMatcher {
  parser: String,
  matcher: GlobMatcher,
}

impl ParserResolver {
  pub fn new(config: &FormatterConfig, plugins: &[PluginInfo]) -> Result<Self> {
    let opts = GlobMatcherOptions::default();
    let mut overrides = Vec::with_capacity(config.overrides.len());
    for rule in &config.overrides {
      overrides.push(OverrideMatcher {
        parser: rule.options.parser.clone(),
        matcher: GlobMatcher::new(&rule.files, &opts)?,
      });
    }
    Ok(ParserResolver {
      overrides,
      plugins: plugins.to_vec(),
    })
  }

  /// `None` means the tool would not format the file.
  pub fn resolve(&self, file_path: impl AsRef<Path>) -> Option<ParserResolution> {
    let file_path = file_path.as_ref();

    let mut selection = None;
    for (rule_index, rule) in self.overrides.iter().enumerate() {
      if rule.matcher.is_match(file_path) {
        selection = Some(ParserResolution::Override {
          rule_index,
          parser: rule.parser.clone(),
        });
      }
    }
    if selection.is_some() {
      return selection;
    }

    if let Some(file_name) = file_path.file_name().and_then(|name| name.to_str()) {
      for plugin in &self.plugins {
        if plugin.matches_file_name(file_name) {
          return Some(ParserResolution::Plugin {
            plugin_name: plugin.name.clone(),
            parser: plugin.parser_name.clone(),
          });
        }
      }
    }

    if let Some(extension) = file_path.extension().and_then(|ext| ext.to_str()) {
      for plugin in &self.plugins {
        if plugin.matches_extension(extension) {
          return Some(ParserResolution::Plugin {
            plugin_name: plugin.name.clone(),
            parser: plugin.parser_name.clone(),
          });
        }
      }
      if let Some((_, parser)) = PARSERS_BY_EXTENSION
        .iter()
        .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
      {
        return Some(ParserResolution::Extension {
          parser: (*parser).to_string(),
        });
      }
    }

    None
  }
}

/// Convenience for a single lookup.
pub fn resolve_parser(
  config: &FormatterConfig,
  plugins: &[PluginInfo],
  file_path: impl AsRef<Path>,
) -> Result<Option<ParserResolution>> {
  Ok(ParserResolver::new(config, plugins)?.resolve(file_path))
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::configuration::OverrideOptions;
  use crate::configuration::OverrideRule;
  use crate::configuration::default_config;
  use crate::plugins::default_plugins;

  #[test]
  fn it_should_select_jsonc_for_tsconfig_variants() {
    assert_eq!(
      resolve("tsconfig.build.json"),
      Some(ParserResolution::Override {
        rule_index: 0,
        parser: String::from("jsonc"),
      })
    );
    assert_eq!(resolve("tsconfig.json").unwrap().parser(), "jsonc");
  }

  #[test]
  fn it_should_select_jsonc_for_vscode_settings() {
    assert_eq!(
      resolve(".vscode/settings.json"),
      Some(ParserResolution::Override {
        rule_index: 0,
        parser: String::from("jsonc"),
      })
    );
  }

  #[test]
  fn it_should_select_sh_for_the_pinned_dotfile() {
    assert_eq!(
      resolve(".bash_profile_remote"),
      Some(ParserResolution::Override {
        rule_index: 1,
        parser: String::from("sh"),
      })
    );
  }

  #[test]
  fn it_should_rely_on_the_packagejson_plugin_for_package_manifests() {
    assert_eq!(
      resolve("package.json"),
      Some(ParserResolution::Plugin {
        plugin_name: String::from("prettier-plugin-packagejson"),
        parser: String::from("json-stringify"),
      })
    );
  }

  #[test]
  fn it_should_fall_back_to_the_extension_parser() {
    assert_eq!(
      resolve("other.json"),
      Some(ParserResolution::Extension {
        parser: String::from("json"),
      })
    );
  }

  #[test]
  fn it_should_select_the_sh_plugin_by_extension() {
    assert_eq!(
      resolve("scripts/install.sh"),
      Some(ParserResolution::Plugin {
        plugin_name: String::from("prettier-plugin-sh"),
        parser: String::from("sh"),
      })
    );
  }

  #[test]
  fn it_should_not_format_unknown_extensions() {
    assert_eq!(resolve("picture.png"), None);
    assert_eq!(resolve(".gitignore"), None);
  }

  #[test]
  fn it_should_let_later_rules_win_for_the_same_file() {
    let mut config = default_config();
    config.overrides.push(OverrideRule {
      files: vec![String::from("**/tsconfig.*.json")],
      options: OverrideOptions {
        parser: String::from("json5"),
      },
    });
    let resolution = resolve_parser(&config, &default_plugins(), "tsconfig.build.json").unwrap();
    assert_eq!(
      resolution,
      Some(ParserResolution::Override {
        rule_index: 2,
        parser: String::from("json5"),
      })
    );
  }

  #[test]
  fn it_should_resolve_many_paths_with_one_resolver() {
    let resolver = ParserResolver::new(&default_config(), &default_plugins()).unwrap();
    assert_eq!(resolver.resolve("tsconfig.build.json").unwrap().parser(), "jsonc");
    assert_eq!(resolver.resolve(".bash_profile_remote").unwrap().parser(), "sh");
    assert_eq!(resolver.resolve("package.json").unwrap().parser(), "json-stringify");
    assert_eq!(resolver.resolve("other.json").unwrap().parser(), "json");
    assert_eq!(resolver.resolve("picture.png"), None);
  }

  #[test]
  fn it_should_recognize_built_in_and_plugin_parsers() {
    let plugins = default_plugins();
    assert!(is_known_parser("jsonc", &plugins));
    assert!(is_known_parser("sh", &plugins));
    assert!(!is_known_parser("cobol", &plugins));
  }

  fn resolve(file_path: &str) -> Option<ParserResolution> {
    resolve_parser(&default_config(), &default_plugins(), file_path).unwrap()
  }
}
