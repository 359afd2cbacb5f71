/* src/server/core/rust/src/replacer.rs */

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::warn;

use crate::context::RenderContext;
use crate::errors::WebappError;
use crate::tokens::BuiltinToken;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Computes one token's markup from the render context.
pub type Replacer =
  Arc<dyn Fn(Arc<RenderContext>) -> BoxFuture<Result<String, WebappError>> + Send + Sync>;

/// Box an async closure into a [`Replacer`].
pub fn replacer<F, Fut>(f: F) -> Replacer
where
  F: Fn(Arc<RenderContext>) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<String, WebappError>> + Send + 'static,
{
  Arc::new(move |ctx: Arc<RenderContext>| -> BoxFuture<Result<String, WebappError>> {
    Box::pin(f(ctx))
  })
}

/// How a standard token name resolves.
pub enum TokenResolution<'a> {
  User(&'a Replacer),
  Builtin(BuiltinToken),
  Unknown,
}

/// User-registered replacers. A name here shadows the built-in of the same name.
#[derive(Clone, Default)]
pub struct TokenReplacers {
  user: HashMap<String, Replacer>,
}

impl TokenReplacers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: impl Into<String>, replacer: Replacer) {
    self.user.insert(name.into(), replacer);
  }

  pub fn lookup(&self, name: &str) -> TokenResolution<'_> {
    if let Some(r) = self.user.get(name) {
      return TokenResolution::User(r);
    }
    match BuiltinToken::from_name(name) {
      Some(token) => TokenResolution::Builtin(token),
      None => TokenResolution::Unknown,
    }
  }
}

/// Resolves `{{~path}}` tokens. `path` is the token body without delimiters or `~`.
pub trait CustomTokenResolver: Send + Sync {
  fn resolve(&self, path: &str, ctx: Arc<RenderContext>) -> BoxFuture<Result<String, WebappError>>;
}

/// Custom token handlers registered by path, e.g. `./views/footer` or `shop.cart/summary`.
/// An unregistered path renders as an empty string.
#[derive(Clone, Default)]
pub struct CustomTokens {
  handlers: HashMap<String, Replacer>,
}

impl CustomTokens {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&mut self, path: impl Into<String>, handler: Replacer) {
    self.handlers.insert(path.into(), handler);
  }
}

impl CustomTokenResolver for CustomTokens {
  fn resolve(&self, path: &str, ctx: Arc<RenderContext>) -> BoxFuture<Result<String, WebappError>> {
    match self.handlers.get(path) {
      Some(handler) => handler(ctx),
      None => {
        warn!(path, "no handler registered for custom token");
        Box::pin(async { Ok(String::new()) })
      }
    }
  }
}
