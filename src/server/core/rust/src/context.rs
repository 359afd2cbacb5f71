/* src/server/core/rust/src/context.rs */

use std::collections::HashMap;
use std::sync::Arc;

use crate::content::PageContent;
use crate::setup::RouteOptions;

/// Request data visible to content providers, chunk selectors, and replacers.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
  pub path: String,
  pub query: HashMap<String, String>,
  /// Header names are lowercase
  pub headers: HashMap<String, String>,
  /// Set by `datass` mode before content resolution so providers can skip markup
  /// and return data only.
  pub disable_ssr: bool,
}

impl PageRequest {
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), ..Self::default() }
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }
}

/// Per-request render mode, usually taken from the `__mode` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
  #[default]
  Full,
  /// Omit bundle scripts
  NoJs,
  /// Skip server-side rendering of content
  NoSs,
  /// Render with the request flagged `disable_ssr`
  DataSs,
}

impl RenderMode {
  pub fn parse(mode: &str) -> Self {
    match mode {
      "nojs" => Self::NoJs,
      "noss" => Self::NoSs,
      "datass" => Self::DataSs,
      _ => Self::Full,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
  pub mode: RenderMode,
  /// Route default AND not disabled by `nojs`
  pub render_js: bool,
}

/// Everything a replacer may read. Built once per render and never mutated.
pub struct RenderContext {
  pub request: PageRequest,
  pub route: Arc<RouteOptions>,
  pub options: RenderOptions,
  pub content: PageContent,
}
