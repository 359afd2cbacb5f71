/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use weave_server::RenderFailure;

/// Newtype so `RenderFailure` can become an Axum response.
pub(crate) struct AxumError(pub RenderFailure);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let failure = self.0;
    let status =
      StatusCode::from_u16(failure.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(failure.html)).into_response()
  }
}

impl From<RenderFailure> for AxumError {
  fn from(failure: RenderFailure) -> Self {
    Self(failure)
  }
}
