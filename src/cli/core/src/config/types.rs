/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use serde::Deserialize;
use weave_server::WebappOptions;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaveConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub webapp: WebappOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_addr")]
  pub addr: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { addr: default_addr() }
  }
}

fn default_addr() -> String {
  "127.0.0.1:3000".to_string()
}

fn rebase(base: &Path, path: &mut PathBuf) {
  if path.is_relative() {
    *path = base.join(&*path);
  }
}

impl WeaveConfig {
  /// Make every file path in `[webapp]` relative to `base` (the config's directory).
  pub fn rebase_paths(&mut self, base: &Path) {
    let webapp = &mut self.webapp;
    for path in [
      &mut webapp.stats,
      &mut webapp.icon_stats,
      &mut webapp.critical_css,
      &mut webapp.build_artifacts,
    ] {
      rebase(base, path);
    }
    if let Some(ref mut file) = webapp.html_file {
      rebase(base, file);
    }
    for path_opts in webapp.paths.values_mut() {
      if let Some(ref mut file) = path_opts.html_file {
        rebase(base, file);
      }
    }
  }
}
