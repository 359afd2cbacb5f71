/* src/server/core/rust/src/chunk.rs */

use crate::context::PageRequest;

/// Chunk keys chosen for one request. `None` means "no specific chunk".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkNames {
  pub css: Option<String>,
  pub js: Option<String>,
}

impl ChunkNames {
  pub fn both(name: impl Into<String>) -> Self {
    let name = name.into();
    Self { css: Some(name.clone()), js: Some(name) }
  }
}

/// Picks which bundle chunk a request should load.
pub trait ChunkSelector: Send + Sync {
  fn select(&self, request: &PageRequest) -> ChunkNames;
}

impl<F> ChunkSelector for F
where
  F: Fn(&PageRequest) -> ChunkNames + Send + Sync,
{
  fn select(&self, request: &PageRequest) -> ChunkNames {
    self(request)
  }
}

/// Selects `main` for both CSS and JS.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainChunk;

impl ChunkSelector for MainChunk {
  fn select(&self, _request: &PageRequest) -> ChunkNames {
    ChunkNames::both("main")
  }
}
