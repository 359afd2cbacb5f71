/* src/server/injector/rust/src/lib.rs */

//! Placeholder scanning and async replacement for HTML shells.
//!
//! A shell contains `{{NAME}}` tokens (standard) and `{{~path}}` tokens (custom).
//! [`scan`] finds them lazily; [`replace_async`] resolves every match concurrently
//! and splices the fragments back in document order.

mod replace;
mod token;

pub use replace::replace_async;
pub use token::{
  CUSTOM_OPEN, TOKEN_CLOSE, TOKEN_OPEN, TokenKind, TokenMatch, scan, strip_delimiters,
};
