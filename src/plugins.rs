use serde::Deserialize;
use serde::Serialize;

/// Information about a formatting plugin the external tool can load.
///
/// A plugin teaches the tool to handle an additional file type. The
/// identifiers in the configuration's `plugins` list must be resolvable
/// by the tool's plugin loader at startup; nothing is validated here.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
  /// The name of the plugin.
  pub name: String,
  /// The parser the plugin registers with the tool.
  pub parser_name: String,
  /// The file extensions this plugin should format.
  pub file_extensions: Vec<String>,
  /// The file names this plugin should format.
  #[serde(default = "Vec::new")]
  pub exact_file_names: Vec<String>,
  /// A url the user can go to in order to get help information about the plugin.
  pub help_url: String,
}

impl PluginInfo {
  pub fn matches_file_name(&self, file_name: &str) -> bool {
    self.exact_file_names.iter().any(|name| name == file_name)
  }

  pub fn matches_extension(&self, extension: &str) -> bool {
    self.file_extensions.iter().any(|ext| ext.eq_ignore_ascii_case(extension))
  }
}

/// The plugins the shipped configuration loads, in load order.
pub fn default_plugins() -> Vec<PluginInfo> {
  vec![
    PluginInfo {
      name: String::from("prettier-plugin-packagejson"),
      parser_name: String::from("json-stringify"),
      file_extensions: Vec::new(),
      exact_file_names: vec![String::from("package.json")],
      help_url: String::from("https://github.com/matzkoh/prettier-plugin-packagejson"),
    },
    PluginInfo {
      name: String::from("prettier-plugin-sh"),
      parser_name: String::from("sh"),
      file_extensions: vec![String::from("sh"), String::from("bash"), String::from("zsh")],
      exact_file_names: Vec::new(),
      help_url: String::from("https://github.com/un-ts/prettier/tree/master/packages/sh"),
    },
  ]
}
