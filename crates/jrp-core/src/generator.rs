//! Phrase composition.
//!
//! Each draft pairs one prefix word with one suffix word. Either side can be
//! pinned to a caller-supplied literal; the other side is drawn uniformly
//! from the dictionary. The generator never touches a store.

use tracing::{debug, warn};

use crate::{
  Error, Result,
  draw::RandomDraw,
  phrase::PhraseDraft,
  source::WordSource,
  word::{Role, Word},
};

/// Largest batch a single call produces.
pub const MAX_BATCH: usize = 100;

/// Compose up to `n` drafts (clamped to [`MAX_BATCH`]).
///
/// Each iteration draws its prefix and then its suffix, so a scripted
/// [`RandomDraw`] sees indices alternate between the two sides. Drafts are
/// returned in generation order and record both components, so
/// `phrase == prefix || suffix` for every draft. A fixed literal that is not
/// in the dictionary is used anyway and logged as a warning.
pub fn generate<W, R>(
  words: &W,
  draw: &mut R,
  n: usize,
  fixed_prefix: Option<&str>,
  fixed_suffix: Option<&str>,
) -> Result<Vec<PhraseDraft>>
where
  W: WordSource + ?Sized,
  R: RandomDraw + ?Sized,
{
  let n = n.min(MAX_BATCH);
  if n == 0 {
    return Ok(Vec::new());
  }

  let prefix = side(words, Role::Prefix, fixed_prefix)?;
  let suffix = side(words, Role::Suffix, fixed_suffix)?;

  draw.begin_batch();
  let drafts: Vec<_> = (0..n)
    .map(|_| {
      let p = prefix.pick(draw);
      let s = suffix.pick(draw);
      PhraseDraft::new(Some(p), Some(s))
    })
    .collect();
  debug!(n, "generated phrase batch");
  Ok(drafts)
}

/// Where one side of every draft comes from.
enum Side<'a> {
  Fixed(&'a str),
  Drawn(&'a [Word]),
}

impl Side<'_> {
  fn pick<R: RandomDraw + ?Sized>(&self, draw: &mut R) -> String {
    match self {
      Side::Fixed(literal) => (*literal).to_owned(),
      Side::Drawn(candidates) => {
        let i = draw.indices(candidates.len(), 1).first().copied().unwrap_or(0);
        candidates[i].lemma.clone()
      }
    }
  }
}

fn side<'a, W>(words: &'a W, role: Role, fixed: Option<&'a str>) -> Result<Side<'a>>
where
  W: WordSource + ?Sized,
{
  if let Some(literal) = fixed {
    if literal.trim().is_empty() {
      return Err(Error::Input(format!("fixed {role} must not be empty")));
    }
    match words.find(literal, role) {
      Some(word_id) => debug!(%role, word_id, "using fixed word"),
      None => warn!(%role, literal, "fixed word not found in dictionary; using it as-is"),
    }
    return Ok(Side::Fixed(literal));
  }

  let candidates = words.candidates_for(role);
  if candidates.is_empty() {
    return Err(Error::Configuration(format!(
      "word dictionary has no {role} candidates"
    )));
  }
  Ok(Side::Drawn(candidates))
}
