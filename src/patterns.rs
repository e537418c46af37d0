use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use ignore::Match;
use ignore::overrides::Override;
use ignore::overrides::OverrideBuilder;

pub struct GlobMatcherOptions {
  pub case_sensitive: bool,
}

impl Default for GlobMatcherOptions {
  fn default() -> Self {
    GlobMatcherOptions {
      case_sensitive: !cfg!(windows),
    }
  }
}

/// Matches project-relative file paths against a set of glob patterns.
///
/// Patterns follow gitignore-style whitelist semantics: a pattern without
/// a `/` matches the file name at any depth, so `tsconfig.json` matches
/// `packages/app/tsconfig.json` as well as the root one.
pub struct GlobMatcher {
  base_dir: PathBuf,
  matcher: Override,
}

impl GlobMatcher {
  pub fn new(patterns: &[String], opts: &GlobMatcherOptions) -> Result<GlobMatcher> {
    let base_dir = PathBuf::from("./");
    let mut builder = OverrideBuilder::new(&base_dir);
    builder.case_insensitive(!opts.case_sensitive)?;
    for pattern in patterns {
      builder.add(&process_pattern(pattern))?;
    }
    Ok(GlobMatcher {
      matcher: builder.build()?,
      base_dir,
    })
  }

  pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let path = path.strip_prefix(&self.base_dir).unwrap_or(path);
    matches!(self.matcher.matched(path, false), Match::Whitelist(_))
  }
}

fn process_pattern(pattern: &str) -> String {
  if pattern.contains('/') {
    pattern.strip_prefix("./").unwrap_or(pattern).to_string()
  } else {
    // match the bare file name at any depth
    format!("**/{}", pattern)
  }
}
