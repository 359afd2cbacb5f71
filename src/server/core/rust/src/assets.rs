/* src/server/core/rust/src/assets.rs */

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::WebappError;
use crate::options::WebappOptions;

/// One emitted file and the chunks it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetEntry {
  pub name: String,
  #[serde(default, rename = "chunkNames")]
  pub chunk_names: Vec<String>,
}

/// Build output split by type. Loaded once per setup, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
  pub css: Vec<AssetEntry>,
  pub js: Vec<AssetEntry>,
  /// Emitted web app manifest file name, if any
  pub manifest: Option<String>,
}

#[derive(Deserialize)]
struct Stats {
  #[serde(default)]
  assets: Vec<AssetEntry>,
}

impl Assets {
  pub fn from_stats_json(content: &str) -> Result<Self, serde_json::Error> {
    let stats: Stats = serde_json::from_str(content)?;
    let manifest =
      stats.assets.iter().find(|a| a.name.ends_with("manifest.json")).map(|a| a.name.clone());
    let (mut css, mut js) = (Vec::new(), Vec::new());
    for asset in stats.assets {
      if asset.name.ends_with(".js") {
        js.push(asset);
      } else if asset.name.ends_with(".css") {
        css.push(asset);
      }
    }
    Ok(Self { css, js, manifest })
  }

  pub fn find_css(&self, chunk: Option<&str>) -> Option<&AssetEntry> {
    find_chunk(&self.css, chunk)
  }

  pub fn find_js(&self, chunk: Option<&str>) -> Option<&AssetEntry> {
    find_chunk(&self.js, chunk)
  }
}

fn find_chunk<'a>(assets: &'a [AssetEntry], chunk: Option<&str>) -> Option<&'a AssetEntry> {
  let chunk = chunk?;
  assets.iter().find(|a| a.chunk_names.iter().any(|c| c == chunk))
}

/// Dev builds write stats into the build artifacts directory.
pub fn stats_path(options: &WebappOptions) -> PathBuf {
  if options.webpack_dev {
    options.build_artifacts.join("stats.json")
  } else {
    options.stats.clone()
  }
}

pub fn load_assets_from_stats(path: &Path) -> Result<Assets, WebappError> {
  let content = std::fs::read_to_string(path)
    .map_err(|e| WebappError::internal(format!("failed to read {}: {e}", path.display())))?;
  Assets::from_stats_json(&content)
    .map_err(|e| WebappError::internal(format!("failed to parse {}: {e}", path.display())))
}
