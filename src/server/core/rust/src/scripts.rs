/* src/server/core/rust/src/scripts.rs */

use serde::Deserialize;

/// An unbundled script: an external file (`{ src = "..." }` in config) or inline code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
  Src { src: String },
  Inline(String),
}

impl ScriptEntry {
  pub fn src(url: impl Into<String>) -> Self {
    Self::Src { src: url.into() }
  }

  pub fn inline(code: impl Into<String>) -> Self {
    Self::Inline(code.into())
  }

  fn is_empty(&self) -> bool {
    match self {
      Self::Src { src } => src.is_empty(),
      Self::Inline(code) => code.trim().is_empty(),
    }
  }
}

/// A run of consecutive entries of the same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptGroup {
  Src(Vec<String>),
  /// Inline bodies already joined into one script
  Inline(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedScripts {
  pub scripts: Vec<ScriptGroup>,
}

const INLINE_SEPARATOR: &str = ";\n\n";

/// Group consecutive external and inline entries, preserving order. Empty entries are dropped.
pub fn group_scripts<'a>(entries: impl IntoIterator<Item = &'a ScriptEntry>) -> GroupedScripts {
  let mut scripts: Vec<ScriptGroup> = Vec::new();

  for entry in entries.into_iter().filter(|e| !e.is_empty()) {
    match (entry, scripts.last_mut()) {
      (ScriptEntry::Src { src }, Some(ScriptGroup::Src(run))) => run.push(src.clone()),
      (ScriptEntry::Src { src }, _) => scripts.push(ScriptGroup::Src(vec![src.clone()])),
      (ScriptEntry::Inline(code), Some(ScriptGroup::Inline(body))) => {
        body.push_str(INLINE_SEPARATOR);
        body.push_str(code);
      }
      (ScriptEntry::Inline(code), _) => scripts.push(ScriptGroup::Inline(code.clone())),
    }
  }

  GroupedScripts { scripts }
}

pub fn htmlify_scripts(groups: &[ScriptGroup]) -> String {
  groups
    .iter()
    .map(|group| match group {
      ScriptGroup::Inline(body) => format!("<script>{body}</script>\n"),
      ScriptGroup::Src(urls) => urls
        .iter()
        .map(|src| format!(r#"<script src="{src}"></script>"#))
        .collect::<Vec<_>>()
        .join("\n"),
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Group then render; the form every script-emitting token uses.
pub fn render_scripts<'a>(entries: impl IntoIterator<Item = &'a ScriptEntry>) -> String {
  htmlify_scripts(&group_scripts(entries).scripts)
}
