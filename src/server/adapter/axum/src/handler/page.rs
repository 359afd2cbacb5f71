/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{MatchedPath, Query, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Html;
use weave_server::{PageRequest, RenderFailure, RenderMode};

use super::AppState;
use crate::MODE_PARAM;
use crate::error::AxumError;

fn page_request(uri: &Uri, headers: &HeaderMap, query: HashMap<String, String>) -> PageRequest {
  let headers = headers
    .iter()
    .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
    .collect();
  PageRequest { path: uri.path().to_string(), query, headers, disable_ssr: false }
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  headers: HeaderMap,
  Query(query): Query<HashMap<String, String>>,
) -> Result<Html<String>, AxumError> {
  let handler = state
    .pages
    .get(matched.as_str())
    .ok_or_else(|| RenderFailure { status: 404, html: "Page not found".to_string() })?;

  let mode = query.get(MODE_PARAM).map(|m| RenderMode::parse(m)).unwrap_or_default();
  let request = page_request(&uri, &headers, query);
  let html = handler.handle(request, mode).await?;
  Ok(Html(html))
}
