//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings in UTC with whole seconds
//! (`2024-01-02T03:04:05Z`), so lexical order is chronological order.
//! Absent prefix/suffix components are NULL.

use chrono::{DateTime, SecondsFormat, Utc};
use jrp_core::phrase::Phrase;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339_opts(SecondsFormat::Secs, true) }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Favorite flag ───────────────────────────────────────────────────────────

pub fn encode_flag(flag: bool) -> i64 { i64::from(flag) }

pub fn decode_flag(v: i64) -> Result<bool> {
  match v {
    0 => Ok(false),
    1 => Ok(true),
    other => Err(Error::InvalidFlag(other)),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list matching [`RawPhrase::from_row`].
pub const COLUMNS: &str = "id, phrase, prefix, suffix, is_favorited, created_at, updated_at";

/// Values read directly from a `jrp` row.
pub struct RawPhrase {
  pub id:           i64,
  pub phrase:       String,
  pub prefix:       Option<String>,
  pub suffix:       Option<String>,
  pub is_favorited: i64,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawPhrase {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      phrase:       row.get(1)?,
      prefix:       row.get(2)?,
      suffix:       row.get(3)?,
      is_favorited: row.get(4)?,
      created_at:   row.get(5)?,
      updated_at:   row.get(6)?,
    })
  }

  pub fn into_phrase(self) -> Result<Phrase> {
    Ok(Phrase {
      id:           self.id,
      phrase:       self.phrase,
      prefix:       self.prefix,
      suffix:       self.suffix,
      is_favorited: decode_flag(self.is_favorited)?,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}
