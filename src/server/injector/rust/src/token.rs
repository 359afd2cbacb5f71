/* src/server/injector/rust/src/token.rs */

use std::sync::OnceLock;

use regex::Regex;

pub const TOKEN_OPEN: &str = "{{";
pub const TOKEN_CLOSE: &str = "}}";
pub const CUSTOM_OPEN: &str = "{{~";

fn token_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(?i)\{\{[A-Z_~./-]*\}\}").expect("token pattern compiles"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// `{{NAME}}`, looked up in the replacer table
  Standard,
  /// `{{~path}}`, routed to the custom resolver
  Custom,
}

/// One token occurrence. `start..end` is the byte range of `raw` in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'t> {
  pub start: usize,
  pub end: usize,
  pub raw: &'t str,
  pub kind: TokenKind,
}

impl<'t> TokenMatch<'t> {
  /// Lookup key: the raw text without `{{`, `}}` and the custom `~` marker.
  pub fn name(&self) -> &'t str {
    strip_delimiters(self.raw)
  }
}

/// Lazily yield every token in `template`, left to right.
pub fn scan(template: &str) -> impl Iterator<Item = TokenMatch<'_>> {
  token_regex().find_iter(template).map(|m| {
    let raw = m.as_str();
    let kind = if raw.starts_with(CUSTOM_OPEN) { TokenKind::Custom } else { TokenKind::Standard };
    TokenMatch { start: m.start(), end: m.end(), raw, kind }
  })
}

pub fn strip_delimiters(raw: &str) -> &str {
  let inner = raw.strip_prefix(TOKEN_OPEN).unwrap_or(raw);
  let inner = inner.strip_suffix(TOKEN_CLOSE).unwrap_or(inner);
  inner.strip_prefix('~').unwrap_or(inner)
}
