/* src/server/core/rust/src/content.rs */

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::context::PageRequest;
use crate::errors::WebappError;
use crate::options::ContentConfig;
use crate::replacer::BoxFuture;

/// Resolved page content consumed by `SSR_CONTENT` and `PREFETCH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
  pub html: String,
  pub prefetch: Option<String>,
}

impl PageContent {
  pub fn html(html: impl Into<String>) -> Self {
    Self { html: html.into(), prefetch: None }
  }
}

pub type ContentFn =
  Arc<dyn Fn(&PageRequest) -> BoxFuture<Result<PageContent, WebappError>> + Send + Sync>;

/// Where a route gets its server-rendered content from.
#[derive(Clone, Default)]
pub enum Content {
  #[default]
  Empty,
  Html(String),
  Page(PageContent),
  /// Called once per request
  Provider(ContentFn),
  /// Name of an entry in [`ContentModules`]
  Module(String),
}

impl Content {
  pub fn provider<F, Fut>(f: F) -> Self
  where
    F: Fn(&PageRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PageContent, WebappError>> + Send + 'static,
  {
    Self::Provider(Arc::new(
      move |req: &PageRequest| -> BoxFuture<Result<PageContent, WebappError>> { Box::pin(f(req)) },
    ))
  }
}

impl std::fmt::Debug for Content {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Empty => f.write_str("Empty"),
      Self::Html(html) => f.debug_tuple("Html").field(html).finish(),
      Self::Page(page) => f.debug_tuple("Page").field(page).finish(),
      Self::Provider(_) => f.write_str("Provider(..)"),
      Self::Module(name) => f.debug_tuple("Module").field(name).finish(),
    }
  }
}

impl From<ContentConfig> for Content {
  fn from(config: ContentConfig) -> Self {
    match config {
      ContentConfig::Module { module } => Self::Module(module),
      ContentConfig::Page { html, prefetch } => Self::Page(PageContent { html, prefetch }),
      ContentConfig::Html(html) => Self::Html(html),
    }
  }
}

/// Content providers registered by name at setup, referenced by `Content::Module`.
#[derive(Clone, Default)]
pub struct ContentModules {
  modules: HashMap<String, Content>,
}

impl ContentModules {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&mut self, name: impl Into<String>, content: Content) {
    self.modules.insert(name.into(), content);
  }

  pub fn get(&self, name: &str) -> Option<&Content> {
    self.modules.get(name)
  }
}

/// Turn a content source into concrete page content for one request.
pub async fn resolve_content(
  content: &Content,
  modules: &ContentModules,
  request: &PageRequest,
) -> Result<PageContent, WebappError> {
  let content = match content {
    Content::Module(name) => {
      let loaded = modules.get(name).ok_or_else(|| {
        WebappError::internal(format!("content module '{name}' is not registered"))
      })?;
      if let Content::Module(inner) = loaded {
        return Err(WebappError::internal(format!(
          "content module '{name}' points at another module '{inner}'"
        )));
      }
      loaded
    }
    other => other,
  };

  match content {
    Content::Provider(f) => f(request).await,
    Content::Page(page) if !page.html.is_empty() => Ok(page.clone()),
    Content::Html(html) => Ok(PageContent::html(html.clone())),
    Content::Page(_) | Content::Empty | Content::Module(_) => Ok(PageContent::default()),
  }
}
