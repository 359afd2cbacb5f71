/* src/cli/core/src/config/mod.rs */

mod env;
mod loader;
mod types;


pub use env::apply_env;
pub use loader::{find_weave_config, load_weave_config};
pub use types::WeaveConfig;
