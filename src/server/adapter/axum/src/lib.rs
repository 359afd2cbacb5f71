/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use weave_server::WebappParts;

/// Re-export weave-server core for convenience
pub use weave_server;

/// Query parameter that selects the render mode (`nojs`, `noss`, `datass`).
pub const MODE_PARAM: &str = "__mode";

/// Extension trait that converts rendered-page parts into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for WebappParts {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.routes)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "weave server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
