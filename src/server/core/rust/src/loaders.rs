/* src/server/core/rust/src/loaders.rs */

//! File-backed collaborators read during a render.
//! Both are best-effort: a missing or malformed file yields an empty fragment.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

pub async fn load_critical_css(path: &Path) -> String {
  match tokio::fs::read_to_string(path).await {
    Ok(css) => css,
    Err(e) => {
      debug!(path = %path.display(), error = %e, "critical css unavailable");
      String::new()
    }
  }
}

/// Meta and link tags from a favicon build's icon stats. Accepts
/// `{"html": ["<meta ...>", ...]}` or a bare JSON string.
pub async fn load_icon_stats(path: &Path) -> String {
  let content = match tokio::fs::read_to_string(path).await {
    Ok(c) => c,
    Err(e) => {
      debug!(path = %path.display(), error = %e, "icon stats unavailable");
      return String::new();
    }
  };
  match serde_json::from_str::<Value>(&content) {
    Ok(stats) => icon_stats_html(&stats),
    Err(e) => {
      debug!(path = %path.display(), error = %e, "icon stats malformed");
      String::new()
    }
  }
}

fn icon_stats_html(stats: &Value) -> String {
  match stats {
    Value::String(s) => s.clone(),
    Value::Object(obj) => match obj.get("html") {
      Some(Value::Array(tags)) => tags.iter().filter_map(Value::as_str).collect(),
      Some(Value::String(s)) => s.clone(),
      _ => String::new(),
    },
    _ => String::new(),
  }
}
