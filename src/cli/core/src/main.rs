/* src/cli/core/src/main.rs */

mod config;
mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use weave_server::{PageRequest, RenderMode, WebappParts, WebappServer};
use weave_server_axum::IntoAxumRouter;

use config::{WeaveConfig, apply_env, find_weave_config, load_weave_config};

#[derive(Parser)]
#[command(name = "weave", about = "Serve server-rendered HTML shells")]
struct Cli {
  /// Default log level when RUST_LOG is unset
  #[arg(long, global = true, default_value = "info")]
  log_level: String,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Start the HTTP server for every configured path
  Serve {
    /// Path to weave.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bind address, overrides [server].addr
    #[arg(short, long)]
    addr: Option<String>,
  },
  /// Render one page to stdout
  Render {
    /// Path to weave.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Configured route pattern to render, matched exactly (`/items/{id}`, not `/items/42`)
    #[arg(short, long, default_value = "/")]
    path: String,
    /// Render mode: nojs, noss, datass
    #[arg(short, long, default_value = "")]
    mode: String,
  },
}

/// Resolve config path (explicit or auto-detected), parse it, and apply the environment.
fn resolve_config(explicit: Option<PathBuf>) -> Result<WeaveConfig> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_weave_config(&cwd)?
    }
  };
  let mut config = load_weave_config(&path)?;
  apply_env(&mut config.webapp, |key| std::env::var(key).ok());
  tracing::debug!(config = %path.display(), "configuration loaded");
  Ok(config)
}

fn build_parts(config: &WeaveConfig) -> Result<WebappParts> {
  WebappServer::new(config.webapp.clone()).into_parts().context("failed to set up routes")
}

async fn render_once(parts: &WebappParts, path: &str, mode: &str) -> Result<String> {
  let route = parts
    .routes
    .iter()
    .find(|r| r.path == path)
    .ok_or_else(|| anyhow!("no configured route for {path}"))?;
  route
    .handler
    .handle(PageRequest::new(path), RenderMode::parse(mode))
    .await
    .map_err(|failure| anyhow!("render failed with status {}: {}", failure.status, failure.html))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(&cli.log_level);

  match cli.command {
    Command::Serve { config, addr } => {
      let config = resolve_config(config)?;
      let addr = addr.unwrap_or_else(|| config.server.addr.clone());
      let parts = build_parts(&config)?;
      tracing::info!(routes = parts.routes.len(), "routes mounted");
      parts.serve(&addr).await.map_err(|e| anyhow!("server error: {e}"))?;
    }
    Command::Render { config, path, mode } => {
      let config = resolve_config(config)?;
      let parts = build_parts(&config)?;
      let html = render_once(&parts, &path, &mode).await?;
      std::io::stdout().lock().write_all(html.as_bytes()).context("failed to write output")?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config_in(dir: &std::path::Path, toml_src: &str) -> WeaveConfig {
    let path = dir.join("weave.toml");
    std::fs::write(&path, toml_src).unwrap();
    load_weave_config(&path).unwrap()
  }

  #[tokio::test]
  async fn render_configured_route() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("shell.html"), "<main>{{SSR_CONTENT}}</main>").unwrap();
    let config = config_in(
      tmp.path(),
      r#"
[webapp]
html_file = "shell.html"

[webapp.paths."/"]
content = "Static content"
"#,
    );
    let parts = build_parts(&config).unwrap();
    assert_eq!(render_once(&parts, "/", "").await.unwrap(), "<main>Static content</main>");
    assert_eq!(render_once(&parts, "/", "noss").await.unwrap(), "<main></main>");
  }

  #[tokio::test]
  async fn render_unknown_route_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "[webapp.paths.\"/\"]\ncontent = \"x\"\n");
    let parts = build_parts(&config).unwrap();
    let err = render_once(&parts, "/missing", "").await.unwrap_err();
    assert!(err.to_string().contains("/missing"));
  }

  #[tokio::test]
  async fn render_failure_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "[webapp.paths.\"/\"]\ncontent = { module = \"home\" }\n");
    let parts = build_parts(&config).unwrap();
    let err = render_once(&parts, "/", "").await.unwrap_err();
    assert!(err.to_string().contains("status 500"));
  }

  #[tokio::test]
  async fn render_matches_route_pattern_exactly() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "[webapp.paths.\"/items/{id}\"]\ncontent = \"item\"\n");
    let parts = build_parts(&config).unwrap();
    assert!(render_once(&parts, "/items/{id}", "").await.unwrap().contains("item"));
    assert!(render_once(&parts, "/items/42", "").await.is_err());
  }

  #[test]
  fn path_key_without_slash_fails_setup() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "[webapp.paths.\"about\"]\ncontent = \"x\"\n");
    let err = build_parts(&config).err().unwrap();
    assert!(format!("{err:#}").contains("must start with '/'"));
  }

  #[test]
  fn missing_shell_fails_setup() {
    let tmp = tempfile::tempdir().unwrap();
    let src = "[webapp]\nhtml_file = \"nope.html\"\n[webapp.paths.\"/\"]\n";
    let config = config_in(tmp.path(), src);
    assert!(build_parts(&config).is_err());
  }
}
