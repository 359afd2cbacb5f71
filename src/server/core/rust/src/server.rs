/* src/server/core/rust/src/server.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::chunk::ChunkSelector;
use crate::content::Content;
use crate::errors::WebappError;
use crate::handler::{RenderHooks, RouteHandler};
use crate::options::{PathOptions, WebappOptions};
use crate::replacer::{CustomTokenResolver, Replacer};
use crate::setup::setup_options;

/// A mounted page: route pattern plus its handler.
pub struct PageRoute {
  /// Router syntax, e.g. "/" or "/{*path}"
  pub path: String,
  pub handler: RouteHandler,
}

/// Framework-agnostic parts extracted from `WebappServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct WebappParts {
  pub routes: Vec<PageRoute>,
}

pub struct WebappServer {
  options: WebappOptions,
  hooks: RenderHooks,
  chunk_selector: Option<Arc<dyn ChunkSelector>>,
  routes: BTreeMap<String, Content>,
}

impl WebappServer {
  pub fn new(options: WebappOptions) -> Self {
    Self { options, hooks: RenderHooks::default(), chunk_selector: None, routes: BTreeMap::new() }
  }

  /// Register a replacer for `{{name}}`, shadowing a built-in of the same name.
  pub fn token_replacer(mut self, name: impl Into<String>, replacer: Replacer) -> Self {
    self.hooks.replacers.insert(name, replacer);
    self
  }

  pub fn custom_tokens(mut self, resolver: Arc<dyn CustomTokenResolver>) -> Self {
    self.hooks.custom = resolver;
    self
  }

  /// Make `content` available to `{ module = "name" }` content references.
  pub fn content_module(mut self, name: impl Into<String>, content: Content) -> Self {
    self.hooks.modules.register(name, content);
    self
  }

  pub fn chunk_selector(mut self, selector: Arc<dyn ChunkSelector>) -> Self {
    self.chunk_selector = Some(selector);
    self
  }

  /// Serve `path` with `content`. Takes precedence over content configured in `paths`.
  pub fn route(mut self, path: impl Into<String>, content: Content) -> Self {
    self.routes.insert(path.into(), content);
    self
  }

  /// Run option setup once and build a handler per route. Routes come from the
  /// `paths` option and from [`WebappServer::route`].
  pub fn into_parts(self) -> Result<WebappParts, WebappError> {
    let mut base = setup_options(&self.options);
    if let Some(selector) = self.chunk_selector {
      base = base.with_chunk_selector(selector);
    }
    let hooks = Arc::new(self.hooks);
    let mut explicit = self.routes;

    let mut paths: BTreeMap<String, PathOptions> = self.options.paths;
    for path in explicit.keys() {
      paths.entry(path.clone()).or_default();
    }

    let mut routes = Vec::with_capacity(paths.len());
    for (path, path_opts) in paths {
      if !path.starts_with('/') {
        return Err(WebappError::internal(format!("route path '{path}' must start with '/'")));
      }
      let content = match explicit.remove(&path) {
        Some(content) => content,
        None => path_opts.content.clone().map(Content::from).unwrap_or_default(),
      };
      let handler = RouteHandler::new(base.for_path(&path_opts), content, Arc::clone(&hooks))?;
      routes.push(PageRoute { path, handler });
    }

    Ok(WebappParts { routes })
  }
}

impl Default for WebappServer {
  fn default() -> Self {
    Self::new(WebappOptions::default())
  }
}
