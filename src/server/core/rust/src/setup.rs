/* src/server/core/rust/src/setup.rs */

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::assets::{Assets, load_assets_from_stats, stats_path};
use crate::chunk::{ChunkSelector, MainChunk};
use crate::options::{PathOptions, UnbundledJs, WebappOptions};

/// Route configuration after setup: options plus the values derived from them.
/// Shared read-only by every request on the route.
#[derive(Clone)]
pub struct RouteOptions {
  pub page_title: String,
  pub webpack_dev: bool,
  pub render_js: bool,
  pub server_side_rendering: bool,
  pub html_file: Option<PathBuf>,
  pub unbundled_js: UnbundledJs,
  pub icon_stats: PathBuf,
  pub critical_css: PathBuf,
  pub prod_bundle_base: String,
  pub dev_bundle_base: String,
  pub assets: Arc<Assets>,
  pub chunk_selector: Arc<dyn ChunkSelector>,
}

impl RouteOptions {
  pub fn with_chunk_selector(mut self, selector: Arc<dyn ChunkSelector>) -> Self {
    self.chunk_selector = selector;
    self
  }

  /// Apply a `paths` entry on top of the shared options.
  pub fn for_path(&self, path: &PathOptions) -> Self {
    let mut route = self.clone();
    if let Some(ref file) = path.html_file {
      route.html_file = Some(file.clone());
    }
    if let Some(ref title) = path.page_title {
      route.page_title = title.clone();
    }
    route
  }
}

/// Derive route options: dev bundle base, default chunk selector, and the asset
/// manifest read from build stats. Unreadable stats leave the route without assets.
pub fn setup_options(options: &WebappOptions) -> RouteOptions {
  let path = stats_path(options);
  let assets = match load_assets_from_stats(&path) {
    Ok(assets) => {
      let (css, js) = (assets.css.len(), assets.js.len());
      debug!(stats = %path.display(), css, js, "assets loaded");
      assets
    }
    Err(e) => {
      warn!(error = %e, "continuing without bundle assets");
      Assets::default()
    }
  };

  RouteOptions {
    page_title: options.page_title.clone(),
    webpack_dev: options.webpack_dev,
    render_js: options.render_js,
    server_side_rendering: options.server_side_rendering,
    html_file: options.html_file.clone(),
    unbundled_js: options.unbundled_js.clone(),
    icon_stats: options.icon_stats.clone(),
    critical_css: options.critical_css.clone(),
    prod_bundle_base: options.prod_bundle_base.clone(),
    dev_bundle_base: options.dev_server.bundle_base(),
    assets: Arc::new(assets),
    chunk_selector: Arc::new(MainChunk),
  }
}
