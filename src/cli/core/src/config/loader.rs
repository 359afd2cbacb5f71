/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::WeaveConfig;

/// Walk upward from `start` to find `weave.toml`, like Cargo.toml discovery
pub fn find_weave_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("weave.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("weave.toml not found (searched upward from {})", start.display());
    }
  }
}

/// Parse `path`; relative file paths inside are taken from the config's directory.
pub fn load_weave_config(path: &Path) -> Result<WeaveConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: WeaveConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if let Some(base) = path.parent() {
    config.rebase_paths(base);
  }
  Ok(config)
}
