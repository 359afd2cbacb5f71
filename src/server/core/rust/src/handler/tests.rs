/* src/server/core/rust/src/handler/tests.rs */

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::*;
use crate::content::PageContent;
use crate::options::WebappOptions;
use crate::replacer::replacer;
use crate::setup::setup_options;

const SHELL: &str = r#"<div class="js-content">{{SSR_CONTENT}}</div>"#;

/// Options whose file-backed collaborators all point at missing files.
fn bare_options(dir: &Path) -> WebappOptions {
  WebappOptions {
    stats: dir.join("stats.json"),
    icon_stats: dir.join("iconstats.json"),
    critical_css: dir.join("critical.css"),
    ..Default::default()
  }
}

fn handler(template: &str, content: Content, hooks: RenderHooks) -> RouteHandler {
  let dir = tempfile::tempdir().unwrap();
  let route = setup_options(&bare_options(dir.path()));
  RouteHandler::from_template(template, route, content, Arc::new(hooks))
}

async fn render(h: &RouteHandler) -> Result<String, RenderFailure> {
  h.handle(PageRequest::new("/"), RenderMode::Full).await
}

#[tokio::test]
async fn template_without_tokens_is_unchanged() {
  let shell = "<html><body><p>{ plain } {{ spaced }} text</p></body></html>";
  let h = handler(shell, Content::Html("ignored".into()), RenderHooks::default());
  assert_eq!(render(&h).await.unwrap(), shell);
}

#[tokio::test]
async fn literal_content_string() {
  let h = handler(SHELL, Content::Html("Static content".into()), RenderHooks::default());
  assert_eq!(render(&h).await.unwrap(), r#"<div class="js-content">Static content</div>"#);
}

#[tokio::test]
async fn content_provider_is_awaited() {
  let content = Content::provider(|_: &PageRequest| async {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Ok(PageContent::html("Content from a promise"))
  });
  let h = handler(SHELL, content, RenderHooks::default());
  assert_eq!(render(&h).await.unwrap(), r#"<div class="js-content">Content from a promise</div>"#);
}

#[tokio::test]
async fn content_module_from_registry() {
  let mut hooks = RenderHooks::default();
  hooks.modules.register("./test/data/foo", Content::Html("hello".into()));
  let h = handler(SHELL, Content::Module("./test/data/foo".into()), hooks);
  assert_eq!(render(&h).await.unwrap(), r#"<div class="js-content">hello</div>"#);
}

#[tokio::test]
async fn default_shell_is_used_without_html_file() {
  let dir = tempfile::tempdir().unwrap();
  let route = setup_options(&bare_options(dir.path()));
  let h = RouteHandler::new(route, Content::Html("Static content".into()), Arc::default()).unwrap();
  let html = render(&h).await.unwrap();
  assert!(html.contains(r#"<div class="js-content">Static content</div>"#));
  assert!(html.contains("<title>Untitled Electrode Web Application</title>"));
  assert!(!html.contains("{{"));
}

#[tokio::test]
async fn html_file_is_read_once_at_setup() {
  let dir = tempfile::tempdir().unwrap();
  let shell = dir.path().join("index.html");
  std::fs::write(&shell, "<main>{{SSR_CONTENT}}</main>").unwrap();
  let mut options = bare_options(dir.path());
  options.html_file = Some(shell.clone());
  let h = RouteHandler::new(setup_options(&options), Content::Html("x".into()), Arc::default())
    .unwrap();
  std::fs::write(&shell, "changed").unwrap();
  assert_eq!(render(&h).await.unwrap(), "<main>x</main>");
}

#[test]
fn missing_html_file_fails_setup() {
  let dir = tempfile::tempdir().unwrap();
  let mut options = bare_options(dir.path());
  options.html_file = Some(dir.path().join("missing.html"));
  let err = RouteHandler::new(setup_options(&options), Content::Empty, Arc::default())
    .err()
    .unwrap();
  assert!(err.message().contains("missing.html"));
}

#[tokio::test]
async fn user_replacer_overrides_builtin() {
  let mut hooks = RenderHooks::default();
  hooks
    .replacers
    .insert("SSR_CONTENT", replacer(|_| async { Ok("hey this is the content".to_string()) }));
  let h = handler(SHELL, Content::Html("never shown".into()), hooks);
  assert_eq!(render(&h).await.unwrap(), r#"<div class="js-content">hey this is the content</div>"#);
}

#[tokio::test]
async fn user_replacer_reads_context() {
  let mut hooks = RenderHooks::default();
  hooks.replacers.insert(
    "REQUEST_PATH",
    replacer(|ctx: Arc<RenderContext>| async move { Ok(ctx.request.path.clone()) }),
  );
  let h = handler("<p>{{REQUEST_PATH}}</p>", Content::Empty, hooks);
  let html = h.handle(PageRequest::new("/orders/7"), RenderMode::Full).await.unwrap();
  assert_eq!(html, "<p>/orders/7</p>");
}

#[tokio::test]
async fn unknown_tokens_become_empty() {
  let h = handler("a{{NOT_A_TOKEN}}b{{}}c", Content::Empty, RenderHooks::default());
  assert_eq!(render(&h).await.unwrap(), "abc");
}

#[tokio::test]
async fn custom_tokens_use_custom_resolver() {
  let mut custom = CustomTokens::new();
  custom.register(
    "./test/data/custom-one",
    replacer(|_| async { Ok("custom replacement string".to_string()) }),
  );
  custom.register(
    "./test/data/custom-two",
    replacer(|_| async {
      tokio::time::sleep(Duration::from_millis(5)).await;
      Ok("custom replacement with promise".to_string())
    }),
  );
  let mut hooks = RenderHooks { custom: Arc::new(custom), ..RenderHooks::default() };
  hooks.replacers.insert("CUSTOM_TOKEN", replacer(|_| async { Ok("custom token!".to_string()) }));

  let shell = concat!(
    "<p>{{CUSTOM_TOKEN}}</p>",
    r#"<div class="custom-1">{{~./test/data/custom-one}}</div>"#,
    r#"<div class="custom-2">{{~./test/data/custom-two}}</div>"#,
  );
  let html = render(&handler(shell, Content::Empty, hooks)).await.unwrap();
  assert_eq!(
    html,
    concat!(
      "<p>custom token!</p>",
      r#"<div class="custom-1">custom replacement string</div>"#,
      r#"<div class="custom-2">custom replacement with promise</div>"#,
    ),
  );
}

#[tokio::test]
async fn custom_syntax_never_hits_replacer_map() {
  let mut hooks = RenderHooks::default();
  hooks.replacers.insert("SSR_CONTENT", replacer(|_| async { Ok("from map".to_string()) }));
  let h = handler("[{{~SSR_CONTENT}}]", Content::Html("content".into()), hooks);
  assert_eq!(render(&h).await.unwrap(), "[]");
}

#[tokio::test]
async fn fragments_keep_document_order() {
  let mut hooks = RenderHooks::default();
  hooks.replacers.insert(
    "SLOW",
    replacer(|_| async {
      tokio::time::sleep(Duration::from_millis(20)).await;
      Ok("slow".to_string())
    }),
  );
  hooks.replacers.insert("FAST", replacer(|_| async { Ok("fast".to_string()) }));
  let h = handler("{{SLOW}}-{{FAST}}-{{SLOW}}", Content::Empty, hooks);
  assert_eq!(render(&h).await.unwrap(), "slow-fast-slow");
}

#[tokio::test]
async fn nojs_mode_drops_bundles() {
  let dir = tempfile::tempdir().unwrap();
  let mut route = setup_options(&bare_options(dir.path()));
  route.webpack_dev = true;
  let h = RouteHandler::from_template("{{JS_BUNDLES}}", route, Content::Empty, Arc::default());
  let full = h.handle(PageRequest::new("/"), RenderMode::Full).await.unwrap();
  assert!(full.contains("bundle.dev.js"));
  let nojs = h.handle(PageRequest::new("/"), RenderMode::NoJs).await.unwrap();
  assert_eq!(nojs, "");
}

#[tokio::test]
async fn route_without_js_never_renders_bundles() {
  let dir = tempfile::tempdir().unwrap();
  let mut route = setup_options(&bare_options(dir.path()));
  route.webpack_dev = true;
  route.render_js = false;
  let h = RouteHandler::from_template("{{JS_BUNDLES}}", route, Content::Empty, Arc::default());
  assert_eq!(render(&h).await.unwrap(), "");
}

#[tokio::test]
async fn noss_mode_skips_content() {
  let h = handler(SHELL, Content::Html("Static content".into()), RenderHooks::default());
  let html = h.handle(PageRequest::new("/"), RenderMode::NoSs).await.unwrap();
  assert_eq!(html, r#"<div class="js-content"></div>"#);
}

#[tokio::test]
async fn noss_ignored_when_route_disables_ssr() {
  let dir = tempfile::tempdir().unwrap();
  let mut route = setup_options(&bare_options(dir.path()));
  route.server_side_rendering = false;
  let h = RouteHandler::from_template(SHELL, route, Content::Html("kept".into()), Arc::default());
  let html = h.handle(PageRequest::new("/"), RenderMode::NoSs).await.unwrap();
  assert_eq!(html, r#"<div class="js-content">kept</div>"#);
}

#[tokio::test]
async fn datass_flags_request_before_content() {
  let seen = Arc::new(AtomicBool::new(false));
  let flag = Arc::clone(&seen);
  let content = Content::provider(move |req: &PageRequest| {
    flag.store(req.disable_ssr, Ordering::SeqCst);
    async { Ok(PageContent::html("data only")) }
  });
  let h = handler(SHELL, content, RenderHooks::default());
  h.handle(PageRequest::new("/"), RenderMode::DataSs).await.unwrap();
  assert!(seen.load(Ordering::SeqCst));
}

#[tokio::test]
async fn rejecting_content_gives_500() {
  let content = Content::provider(|_: &PageRequest| async {
    Err::<PageContent, _>(WebappError::internal("database unavailable"))
  });
  let h = handler(SHELL, content, RenderHooks::default());
  assert_eq!(
    render(&h).await.unwrap_err(),
    RenderFailure { status: 500, html: "database unavailable".into() },
  );
}

#[tokio::test]
async fn rejecting_content_keeps_its_status() {
  let content = Content::provider(|_: &PageRequest| async {
    Err::<PageContent, _>(WebappError::not_found("no such product"))
  });
  let h = handler(SHELL, content, RenderHooks::default());
  assert_eq!(
    render(&h).await.unwrap_err(),
    RenderFailure { status: 404, html: "no such product".into() },
  );
}

#[tokio::test]
async fn rejecting_replacer_fails_whole_render() {
  let mut hooks = RenderHooks::default();
  let broken = replacer(|_| async { Err::<String, _>(WebappError::internal("boom")) });
  hooks.replacers.insert("BROKEN", broken);
  let h = handler("<head>{{PAGE_TITLE}}</head>{{BROKEN}}", Content::Empty, hooks);
  assert_eq!(render(&h).await.unwrap_err(), RenderFailure { status: 500, html: "boom".into() });
}

#[tokio::test]
async fn unregistered_module_fails_render() {
  let h = handler(SHELL, Content::Module("./nowhere".into()), RenderHooks::default());
  let failure = render(&h).await.unwrap_err();
  assert_eq!(failure.status, 500);
  assert!(failure.html.contains("./nowhere"));
}

#[tokio::test]
async fn manifest_link_in_production() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("stats.json"),
    r#"{"assets": [{"name": "manifest.json", "chunkNames": []}]}"#,
  )
  .unwrap();
  let route = setup_options(&bare_options(dir.path()));
  let h =
    RouteHandler::from_template("<head>{{MANIFEST}}</head>", route, Content::Empty, Arc::default());
  let html = render(&h).await.unwrap();
  let link = "<link rel=\"manifest\" href=\"/js/manifest.json\" />\n";
  assert_eq!(html.matches(link).count(), 1);
  assert_eq!(html, format!("<head>{link}</head>"));
}

#[tokio::test]
async fn builtin_tokens_end_to_end() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("stats.json"),
    r#"{"assets": [
      {"name": "bundle.f07a873ce87fc904a6a5.js", "chunkNames": ["main"]},
      {"name": "style.f07a873ce87fc904a6a5.css", "chunkNames": ["main"]}
    ]}"#,
  )
  .unwrap();
  std::fs::write(dir.path().join("critical.css"), "body {color: green;}\n").unwrap();
  std::fs::write(
    dir.path().join("iconstats.json"),
    r#"{"html": ["<meta name=\"mobile-web-app-capable\" content=\"yes\">"]}"#,
  )
  .unwrap();
  let mut options = bare_options(dir.path());
  options.page_title = "new page title".into();

  let h = RouteHandler::new(setup_options(&options), Content::Empty, Arc::default()).unwrap();
  let html = render(&h).await.unwrap();
  assert!(html.contains("<style>body {color: green;}\n</style>"));
  assert!(html.contains(r#"<meta name="mobile-web-app-capable" content="yes">"#));
  assert!(html.contains("<title>new page title</title>"));
  assert!(html.contains(r#"<link rel="stylesheet" href="/js/style.f07a873ce87fc904a6a5.css" />"#));
  assert!(html.contains(r#"<script src="/js/bundle.f07a873ce87fc904a6a5.js"></script>"#));
}
