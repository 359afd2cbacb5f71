/* src/server/core/rust/src/options.rs */

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::scripts::ScriptEntry;

/// User-facing options, typically the `[webapp]` table of `weave.toml`.
/// Every field has a default so an empty table is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebappOptions {
  pub page_title: String,
  /// Serve bundles from the dev server instead of `prod_bundle_base`
  pub webpack_dev: bool,
  pub render_js: bool,
  pub server_side_rendering: bool,
  /// HTML shell; the bundled default shell is used when unset
  pub html_file: Option<PathBuf>,
  pub dev_server: DevServer,
  pub unbundled_js: UnbundledJs,
  /// Route path -> per-path overrides
  pub paths: BTreeMap<String, PathOptions>,
  pub stats: PathBuf,
  pub icon_stats: PathBuf,
  pub critical_css: PathBuf,
  pub build_artifacts: PathBuf,
  pub prod_bundle_base: String,
}

impl Default for WebappOptions {
  fn default() -> Self {
    Self {
      page_title: "Untitled Electrode Web Application".to_string(),
      webpack_dev: false,
      render_js: true,
      server_side_rendering: true,
      html_file: None,
      dev_server: DevServer::default(),
      unbundled_js: UnbundledJs::default(),
      paths: BTreeMap::new(),
      stats: PathBuf::from("dist/server/stats.json"),
      icon_stats: PathBuf::from("dist/server/iconstats.json"),
      critical_css: PathBuf::from("dist/js/critical.css"),
      build_artifacts: PathBuf::from(".build"),
      prod_bundle_base: "/js/".to_string(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DevServer {
  pub host: String,
  pub port: u16,
  pub https: bool,
}

impl Default for DevServer {
  fn default() -> Self {
    Self { host: "127.0.0.1".to_string(), port: 2992, https: false }
  }
}

impl DevServer {
  /// Base URL that dev-mode bundle links point at, e.g. `http://127.0.0.1:2992/js/`.
  pub fn bundle_base(&self) -> String {
    let protocol = if self.https { "https" } else { "http" };
    format!("{protocol}://{}:{}/js/", self.host, self.port)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnbundledJs {
  /// Rendered by `HEAD_SCRIPTS`
  pub enter_head: Vec<ScriptEntry>,
  /// Emitted by `JS_BUNDLES` before the main bundle
  pub pre_bundle: Vec<ScriptEntry>,
  /// Emitted by `JS_BUNDLES` after the main bundle
  pub post_bundle: Vec<ScriptEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathOptions {
  pub content: Option<ContentConfig>,
  pub html_file: Option<PathBuf>,
  pub page_title: Option<String>,
}

/// Content as it can be written in config. Providers backed by code are
/// registered on the server builder and referenced through `module`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContentConfig {
  Module { module: String },
  Page { html: String, prefetch: Option<String> },
  Html(String),
}
