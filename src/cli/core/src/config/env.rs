/* src/cli/core/src/config/env.rs */

use weave_server::WebappOptions;

/// Overlay the dev-server environment onto `options`.
///
/// - `WEBPACK_DEV=true` enables dev bundles
/// - `WEBPACK_HOST`, `WEBPACK_DEV_PORT` set the dev server address
/// - `WEBPACK_DEV_HTTPS` (any non-empty value) switches the dev server to https
pub fn apply_env(options: &mut WebappOptions, var: impl Fn(&str) -> Option<String>) {
  if let Some(dev) = var("WEBPACK_DEV") {
    options.webpack_dev = dev == "true";
  }
  if let Some(host) = var("WEBPACK_HOST").filter(|h| !h.is_empty()) {
    options.dev_server.host = host;
  }
  if let Some(port) = var("WEBPACK_DEV_PORT").and_then(|p| p.parse().ok()) {
    options.dev_server.port = port;
  }
  if var("WEBPACK_DEV_HTTPS").is_some_and(|v| !v.is_empty()) {
    options.dev_server.https = true;
  }
}
