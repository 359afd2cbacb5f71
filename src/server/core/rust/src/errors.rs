/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Failure raised while setting up a route or rendering a page.
#[derive(Debug, Clone)]
pub struct WebappError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "BAD_REQUEST" => 400,
    "NOT_FOUND" => 404,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl WebappError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for WebappError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for WebappError {}

pub const HTTP_ERROR_500: u16 = 500;

/// What a route handler hands back when a render does not complete.
/// `html` is the error text; no partially composed page is ever exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
  pub status: u16,
  pub html: String,
}

impl From<WebappError> for RenderFailure {
  fn from(err: WebappError) -> Self {
    let status = if err.status == 0 { HTTP_ERROR_500 } else { err.status };
    let html = if err.message.is_empty() { err.to_string() } else { err.message };
    Self { status, html }
  }
}

impl fmt::Display for RenderFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "render failed ({}): {}", self.status, self.html)
  }
}

impl std::error::Error for RenderFailure {}
