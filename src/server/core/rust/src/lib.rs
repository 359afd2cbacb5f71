/* src/server/core/rust/src/lib.rs */

pub mod assets;
pub mod chunk;
pub mod content;
pub mod context;
pub mod errors;
pub mod handler;
pub mod loaders;
pub mod options;
pub mod replacer;
pub mod scripts;
pub mod server;
pub mod setup;
pub mod tokens;

// Re-exports for ergonomic use
pub use assets::{AssetEntry, Assets, load_assets_from_stats};
pub use chunk::{ChunkNames, ChunkSelector, MainChunk};
pub use content::{Content, ContentModules, PageContent};
pub use context::{PageRequest, RenderContext, RenderMode, RenderOptions};
pub use errors::{RenderFailure, WebappError};
pub use handler::{DEFAULT_SHELL, RenderHooks, RouteHandler, compose};
pub use options::{ContentConfig, DevServer, PathOptions, UnbundledJs, WebappOptions};
pub use replacer::{
  BoxFuture, CustomTokenResolver, CustomTokens, Replacer, TokenReplacers, replacer,
};
pub use scripts::ScriptEntry;
pub use server::{PageRoute, WebappParts, WebappServer};
pub use setup::{RouteOptions, setup_options};
pub use tokens::BuiltinToken;
