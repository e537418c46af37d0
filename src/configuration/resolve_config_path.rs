use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;

use super::DeserializeConfigResult;
use super::deserialize_config;

pub static POSSIBLE_CONFIG_FILE_NAMES: [&str; 4] = [
  "formatter.config.json",
  "formatter.config.jsonc",
  ".formatterrc.json",
  ".formatterrc.jsonc",
];

#[derive(Debug, Error)]
pub enum ResolveConfigError {
  #[error("No config file found at {}. Did you mean to create one?", .config_path.display())]
  NotFound { config_path: PathBuf },
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

/// Resolves the config file by its conventional names, searching the
/// start directory then its ancestors.
pub fn resolve_config_path(start_dir: impl AsRef<Path>) -> Result<PathBuf, ResolveConfigError> {
  let start_dir = start_dir.as_ref();
  for dir in start_dir.ancestors() {
    if let Some(config_path) = get_config_file_in_dir(dir) {
      return Ok(config_path);
    }
  }
  Err(ResolveConfigError::NotFound {
    config_path: start_dir.join(POSSIBLE_CONFIG_FILE_NAMES[0]),
  })
}

/// Reads and deserializes the config file at the provided path.
pub fn read_config_file(file_path: impl AsRef<Path>) -> Result<DeserializeConfigResult, ResolveConfigError> {
  let file_path = file_path.as_ref();
  if !file_path.is_file() {
    return Err(ResolveConfigError::NotFound {
      config_path: file_path.to_path_buf(),
    });
  }
  let file_text = std::fs::read_to_string(file_path)
    .with_context(|| format!("Error reading config file {}", file_path.display()))?;
  let result = deserialize_config(&file_text)
    .with_context(|| format!("Error deserializing config file {}", file_path.display()))?;
  Ok(result)
}

fn get_config_file_in_dir(dir: &Path) -> Option<PathBuf> {
  POSSIBLE_CONFIG_FILE_NAMES
    .iter()
    .map(|file_name| dir.join(file_name))
    .find(|config_path| config_path.is_file())
}
