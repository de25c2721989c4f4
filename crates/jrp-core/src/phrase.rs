//! Phrase types: the rows of the generation history.
//!
//! A phrase is the concatenation of a prefix word and a suffix word. Drafts
//! live only in memory; once a store has assigned an id and timestamps they
//! become [`Phrase`] rows.

use chrono::{DateTime, Utc};

/// Identifier assigned by the store on insert. Never reused.
pub type PhraseId = i64;

// ─── Draft ───────────────────────────────────────────────────────────────────

/// A generated phrase that has not been written to a store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseDraft {
  pub phrase: String,
  pub prefix: Option<String>,
  pub suffix: Option<String>,
}

impl PhraseDraft {
  /// Build a draft from its components. `phrase` is always
  /// `prefix || suffix`, with an absent side contributing nothing.
  pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
    let phrase = format!(
      "{}{}",
      prefix.as_deref().unwrap_or_default(),
      suffix.as_deref().unwrap_or_default()
    );
    Self { phrase, prefix, suffix }
  }

  /// A draft carrying only the concatenated text, with no recorded
  /// components.
  pub fn literal(phrase: impl Into<String>) -> Self {
    Self { phrase: phrase.into(), prefix: None, suffix: None }
  }
}

// ─── Phrase ──────────────────────────────────────────────────────────────────

/// A persisted history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
  pub id:           PhraseId,
  pub phrase:       String,
  pub prefix:       Option<String>,
  pub suffix:       Option<String>,
  /// Membership in the favorite set.
  pub is_favorited: bool,
  /// Set at insert; never changes.
  pub created_at:   DateTime<Utc>,
  /// Rewritten whenever `is_favorited` flips.
  pub updated_at:   DateTime<Utc>,
}
