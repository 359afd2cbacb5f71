/* src/server/core/rust/src/tokens.rs */

use crate::context::RenderContext;
use crate::errors::WebappError;
use crate::loaders::{load_critical_css, load_icon_stats};
use crate::scripts::{ScriptEntry, render_scripts};

/// Token names every shell can use without registering anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinToken {
  SsrContent,
  CssBundles,
  JsBundles,
  PageTitle,
  CriticalCss,
  HeadScripts,
  /// Reserved, always empty
  HeadLinks,
  MetaTags,
  Prefetch,
  Manifest,
}

impl BuiltinToken {
  pub const ALL: [Self; 10] = [
    Self::SsrContent,
    Self::CssBundles,
    Self::JsBundles,
    Self::PageTitle,
    Self::CriticalCss,
    Self::HeadScripts,
    Self::HeadLinks,
    Self::MetaTags,
    Self::Prefetch,
    Self::Manifest,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::SsrContent => "SSR_CONTENT",
      Self::CssBundles => "CSS_BUNDLES",
      Self::JsBundles => "JS_BUNDLES",
      Self::PageTitle => "PAGE_TITLE",
      Self::CriticalCss => "CRITICAL_CSS",
      Self::HeadScripts => "HEAD_SCRIPTS",
      Self::HeadLinks => "HEAD_LINKS",
      Self::MetaTags => "META_TAGS",
      Self::Prefetch => "PREFETCH",
      Self::Manifest => "MANIFEST",
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|t| t.as_str() == name)
  }

  pub async fn resolve(self, ctx: &RenderContext) -> Result<String, WebappError> {
    let html = match self {
      Self::SsrContent => ctx.content.html.clone(),
      Self::CssBundles => css_bundles(ctx),
      Self::JsBundles => js_bundles(ctx),
      Self::PageTitle => format!("<title>{}</title>", ctx.route.page_title),
      Self::CriticalCss => {
        let css = load_critical_css(&ctx.route.critical_css).await;
        if css.is_empty() { String::new() } else { format!("<style>{css}</style>") }
      }
      Self::HeadScripts => render_scripts(&ctx.route.unbundled_js.enter_head),
      Self::HeadLinks => String::new(),
      Self::MetaTags => load_icon_stats(&ctx.route.icon_stats).await,
      Self::Prefetch => ctx.content.prefetch.clone().unwrap_or_default(),
      Self::Manifest => manifest_link(ctx),
    };
    Ok(html)
  }
}

impl std::fmt::Display for BuiltinToken {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

enum Bundle {
  Css,
  Js,
}

/// URL of the bundle the request's chunk selector picks. In dev mode the URL always
/// points at the dev server; in production it exists only if the chunk was emitted.
fn bundle_url(ctx: &RenderContext, bundle: &Bundle) -> Option<String> {
  let route = &ctx.route;
  let chunks = route.chunk_selector.select(&ctx.request);
  let (chunk, dev_file) = match bundle {
    Bundle::Css => (chunks.css, "style.css"),
    Bundle::Js => (chunks.js, "bundle.dev.js"),
  };

  if route.webpack_dev {
    let base = &route.dev_bundle_base;
    return Some(match chunk {
      Some(name) => format!("{base}{name}.{dev_file}"),
      None => format!("{base}{dev_file}"),
    });
  }

  let asset = match bundle {
    Bundle::Css => route.assets.find_css(chunk.as_deref()),
    Bundle::Js => route.assets.find_js(chunk.as_deref()),
  }?;
  Some(format!("{}{}", route.prod_bundle_base, asset.name))
}

fn css_bundles(ctx: &RenderContext) -> String {
  match bundle_url(ctx, &Bundle::Css) {
    Some(url) => format!(r#"<link rel="stylesheet" href="{url}" />"#),
    None => String::new(),
  }
}

fn js_bundles(ctx: &RenderContext) -> String {
  if !ctx.options.render_js {
    return String::new();
  }
  let unbundled = &ctx.route.unbundled_js;
  let main = bundle_url(ctx, &Bundle::Js).map(ScriptEntry::src);
  let entries = unbundled.pre_bundle.iter().chain(main.iter()).chain(unbundled.post_bundle.iter());
  render_scripts(entries)
}

fn manifest_link(ctx: &RenderContext) -> String {
  let route = &ctx.route;
  let Some(ref manifest) = route.assets.manifest else {
    return String::new();
  };
  let base = if route.webpack_dev { &route.dev_bundle_base } else { &route.prod_bundle_base };
  format!("<link rel=\"manifest\" href=\"{base}{manifest}\" />\n")
}
