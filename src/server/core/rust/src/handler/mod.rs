/* src/server/core/rust/src/handler/mod.rs */

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, warn};
use weave_injector::{TokenKind, replace_async};

use crate::content::{Content, ContentModules, resolve_content};
use crate::context::{PageRequest, RenderContext, RenderMode, RenderOptions};
use crate::errors::{RenderFailure, WebappError};
use crate::replacer::{
  BoxFuture, CustomTokenResolver, CustomTokens, TokenReplacers, TokenResolution,
};
use crate::setup::RouteOptions;

/// Shell used when no `html_file` is configured.
pub const DEFAULT_SHELL: &str = include_str!("../index.html");

static NO_CONTENT: Content = Content::Empty;

/// Extension points shared by every route of a server.
#[derive(Clone)]
pub struct RenderHooks {
  pub replacers: TokenReplacers,
  pub custom: Arc<dyn CustomTokenResolver>,
  pub modules: ContentModules,
}

impl Default for RenderHooks {
  fn default() -> Self {
    Self {
      replacers: TokenReplacers::new(),
      custom: Arc::new(CustomTokens::new()),
      modules: ContentModules::new(),
    }
  }
}

/// Renders one route: the shell is read once, every call composes a fresh page.
pub struct RouteHandler {
  template: String,
  route: Arc<RouteOptions>,
  content: Content,
  hooks: Arc<RenderHooks>,
}

impl RouteHandler {
  pub fn new(
    route: RouteOptions,
    content: Content,
    hooks: Arc<RenderHooks>,
  ) -> Result<Self, WebappError> {
    let template = match route.html_file {
      Some(ref path) => std::fs::read_to_string(path)
        .map_err(|e| WebappError::internal(format!("failed to read {}: {e}", path.display())))?,
      None => DEFAULT_SHELL.to_string(),
    };
    Ok(Self::from_template(template, route, content, hooks))
  }

  pub fn from_template(
    template: impl Into<String>,
    route: RouteOptions,
    content: Content,
    hooks: Arc<RenderHooks>,
  ) -> Self {
    Self { template: template.into(), route: Arc::new(route), content, hooks }
  }

  /// Resolve content, then compose the page. Any failure comes back as a
  /// [`RenderFailure`] with the error's status (500 by default) and message.
  pub async fn handle(
    &self,
    mut request: PageRequest,
    mode: RenderMode,
  ) -> Result<String, RenderFailure> {
    let render_js = self.route.render_js && mode != RenderMode::NoJs;
    let mut render_ss = true;
    if self.route.server_side_rendering {
      match mode {
        RenderMode::NoSs => render_ss = false,
        RenderMode::DataSs => request.disable_ssr = true,
        RenderMode::Full | RenderMode::NoJs => {}
      }
    }
    let options = RenderOptions { mode, render_js };
    let path = request.path.clone();
    debug!(%path, ?mode, render_js, render_ss, "rendering page");

    self.render(request, options, render_ss).await.map_err(|err| {
      warn!(%path, error = %err, "page render failed");
      RenderFailure::from(err)
    })
  }

  async fn render(
    &self,
    request: PageRequest,
    options: RenderOptions,
    render_ss: bool,
  ) -> Result<String, WebappError> {
    let source = if render_ss { &self.content } else { &NO_CONTENT };
    let content = resolve_content(source, &self.hooks.modules, &request).await?;
    let ctx = Arc::new(RenderContext { request, route: Arc::clone(&self.route), options, content });
    compose(&self.template, ctx, &self.hooks).await
  }
}

/// Replace every token of `template` in document order. Custom tokens go to the
/// custom resolver; standard tokens to a user replacer, else the built-in, else "".
pub async fn compose(
  template: &str,
  ctx: Arc<RenderContext>,
  hooks: &RenderHooks,
) -> Result<String, WebappError> {
  replace_async(template, |m| -> BoxFuture<Result<String, WebappError>> {
    let ctx = Arc::clone(&ctx);
    match m.kind {
      TokenKind::Custom => hooks.custom.resolve(m.name(), ctx),
      TokenKind::Standard => match hooks.replacers.lookup(m.name()) {
        TokenResolution::User(replacer) => replacer(ctx),
        TokenResolution::Builtin(token) => Box::pin(async move { token.resolve(&ctx).await }),
        TokenResolution::Unknown => Box::pin(async { Ok(String::new()) }),
      },
    }
  })
  .await
}
