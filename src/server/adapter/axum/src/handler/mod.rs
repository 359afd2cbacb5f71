/* src/server/adapter/axum/src/handler/mod.rs */

mod page;


use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use weave_server::{PageRoute, RouteHandler};

pub(crate) struct AppState {
  /// Route pattern -> handler
  pub pages: HashMap<String, Arc<RouteHandler>>,
}

pub(crate) fn build_router(routes: Vec<PageRoute>) -> Router {
  let mut pages = HashMap::new();
  let mut router = Router::new();

  for PageRoute { path, handler } in routes {
    router = router.route(&path, get(page::handle_page));
    pages.insert(path, Arc::new(handler));
  }

  router.with_state(Arc::new(AppState { pages }))
}
