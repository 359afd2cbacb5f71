/* src/server/injector/rust/src/replace.rs */

use std::future::Future;

use futures_util::future::try_join_all;

use crate::token::{TokenMatch, scan};

/// Replace every token in `template` with the fragment produced by `resolve`.
///
/// All resolutions are in flight at once on the calling task; completion order does
/// not matter, each fragment lands at its token's original position. Literal text
/// between tokens is copied unchanged. The first error aborts the whole replacement.
pub async fn replace_async<'t, F, Fut, E>(template: &'t str, mut resolve: F) -> Result<String, E>
where
  F: FnMut(&TokenMatch<'t>) -> Fut,
  Fut: Future<Output = Result<String, E>>,
{
  let matches: Vec<TokenMatch<'t>> = scan(template).collect();
  if matches.is_empty() {
    return Ok(template.to_string());
  }

  let pending: Vec<Fut> = matches.iter().map(&mut resolve).collect();
  let fragments = try_join_all(pending).await?;

  let extra: usize = fragments.iter().map(String::len).sum();
  let mut out = String::with_capacity(template.len() + extra);
  let mut pos = 0;
  for (m, fragment) in matches.iter().zip(&fragments) {
    out.push_str(&template[pos..m.start]);
    out.push_str(fragment);
    pos = m.end;
  }
  out.push_str(&template[pos..]);
  Ok(out)
}
