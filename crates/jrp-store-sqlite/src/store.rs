//! [`SqliteStore`]: the SQLite implementation of [`PhraseStore`].

use std::{fs, path::Path};

use jrp_core::{
  clock::{Clock, SystemClock},
  phrase::{Phrase, PhraseDraft, PhraseId},
  store::{PhraseStore, Scope, SearchMode, SearchQuery},
};
use rusqlite::{Connection, params, params_from_iter, types::Value};
use tracing::debug;

use crate::{
  Error, Result,
  encode::{COLUMNS, RawPhrase, encode_dt, encode_flag},
  schema::{LATEST_VERSION, MIGRATIONS, PRAGMAS},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phrase store backed by a single SQLite file.
///
/// Only one process should write to a file at a time; a colliding write
/// fails with [`Error::Database`].
pub struct SqliteStore {
  conn:  Connection,
  clock: Box<dyn Clock>,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, creating missing parent directories
  /// and applying pending migrations.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent)?;
    }
    debug!(path = %path.display(), "opening phrase store");
    Self::init(Connection::open(path)?)
  }

  /// Open an in-memory store, mostly for tests.
  pub fn open_in_memory() -> Result<Self> { Self::init(Connection::open_in_memory()?) }

  /// Replace the clock used to stamp `created_at` / `updated_at`.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Box::new(clock);
    self
  }

  fn init(mut conn: Connection) -> Result<Self> {
    conn.execute_batch(PRAGMAS)?;
    migrate(&mut conn)?;
    Ok(Self { conn, clock: Box::new(SystemClock) })
  }

  /// The `user_version` recorded in the database file.
  pub fn schema_version(&self) -> Result<i64> { Ok(user_version(&self.conn)?) }

  fn now(&self) -> String { encode_dt(self.clock.now()) }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &Connection { &self.conn }

  fn query_phrases<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Phrase>> {
    let mut stmt = self.conn.prepare(sql)?;
    let raws = stmt
      .query_map(params, RawPhrase::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawPhrase::into_phrase).collect()
  }

  /// Run `sql` once per id inside one transaction, summing affected rows.
  fn execute_per_id<P>(&mut self, sql: &str, ids: &[PhraseId], params: P) -> Result<usize>
  where
    P: Fn(PhraseId) -> Vec<Value>,
  {
    let tx = self.conn.transaction()?;
    let mut affected = 0;
    {
      let mut stmt = tx.prepare(sql)?;
      for &id in ids {
        affected += stmt.execute(params_from_iter(params(id)))?;
      }
    }
    tx.commit()?;
    Ok(affected)
  }
}

// ─── Migrations ──────────────────────────────────────────────────────────────

fn user_version(conn: &Connection) -> rusqlite::Result<i64> {
  conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn migrate(conn: &mut Connection) -> Result<()> {
  let current = user_version(conn)?;
  if !(0..=LATEST_VERSION).contains(&current) {
    return Err(Error::UnsupportedSchema { found: current, supported: LATEST_VERSION });
  }
  if current == LATEST_VERSION {
    return Ok(());
  }

  let tx = conn.transaction()?;
  for (from, sql) in MIGRATIONS.iter().enumerate().skip(current as usize) {
    debug!(from, to = from + 1, "applying schema migration");
    tx.execute_batch(sql)?;
  }
  tx.pragma_update(None, "user_version", LATEST_VERSION)?;
  tx.commit()?;
  Ok(())
}

// ─── SQL builders ────────────────────────────────────────────────────────────

fn scope_filter(scope: Scope) -> Option<&'static str> {
  match scope {
    Scope::AllHistory => None,
    Scope::FavoritesOnly => Some("is_favorited = 1"),
  }
}

fn where_clause(conds: &[&str]) -> String {
  if conds.is_empty() {
    String::new()
  } else {
    format!("WHERE {}", conds.join(" AND "))
  }
}

/// Wrap a filtered select so only the newest `LIMIT` rows survive, then put
/// them back in ascending order.
fn latest_ascending(where_clause: &str, limit_param: usize) -> String {
  format!(
    "SELECT {COLUMNS} FROM (
       SELECT {COLUMNS} FROM jrp {where_clause} ORDER BY id DESC LIMIT ?{limit_param}
     ) ORDER BY id ASC"
  )
}

/// Ids bound per `IN (...)` query, well under SQLite's variable limit.
const ID_CHUNK: usize = 500;

fn limit_value(n: usize) -> i64 { i64::try_from(n).unwrap_or(i64::MAX) }

// ─── PhraseStore impl ────────────────────────────────────────────────────────

impl PhraseStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  fn insert_batch(&mut self, drafts: &[PhraseDraft]) -> Result<Vec<Phrase>> {
    let now = self.clock.now();
    let at = encode_dt(now);

    let tx = self.conn.transaction()?;
    let mut rows = Vec::with_capacity(drafts.len());
    {
      let mut stmt = tx.prepare(
        "INSERT INTO jrp (phrase, prefix, suffix, is_favorited, created_at, updated_at)
         VALUES (?1, ?2, ?3, 0, ?4, ?4)",
      )?;
      for draft in drafts {
        let id = stmt.insert(params![draft.phrase, draft.prefix, draft.suffix, at])?;
        rows.push(Phrase {
          id,
          phrase:       draft.phrase.clone(),
          prefix:       draft.prefix.clone(),
          suffix:       draft.suffix.clone(),
          is_favorited: false,
          created_at:   now,
          updated_at:   now,
        });
      }
    }
    tx.commit()?;

    debug!(count = rows.len(), "inserted phrases");
    Ok(rows)
  }

  fn set_favorited(&mut self, ids: &[PhraseId], favorited: bool) -> Result<usize> {
    let flag = encode_flag(favorited);
    let at = self.now();
    // MAX keeps updated_at >= created_at even if the clock runs backwards.
    self.execute_per_id(
      "UPDATE jrp SET is_favorited = ?1, updated_at = MAX(created_at, ?2)
       WHERE id = ?3 AND is_favorited <> ?1",
      ids,
      |id| vec![Value::Integer(flag), Value::Text(at.clone()), Value::Integer(id)],
    )
  }

  fn unfavorite_all(&mut self) -> Result<usize> {
    let at = self.now();
    let tx = self.conn.transaction()?;
    let changed = tx.execute(
      "UPDATE jrp SET is_favorited = 0, updated_at = MAX(created_at, ?1)
       WHERE is_favorited = 1",
      params![at],
    )?;
    tx.commit()?;
    Ok(changed)
  }

  fn delete_by_ids(&mut self, ids: &[PhraseId]) -> Result<usize> {
    self.execute_per_id("DELETE FROM jrp WHERE id = ?1", ids, |id| vec![Value::Integer(id)])
  }

  fn delete_all(&mut self) -> Result<usize> {
    let tx = self.conn.transaction()?;
    let deleted = tx.execute("DELETE FROM jrp", [])?;
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'jrp'", [])?;
    tx.commit()?;
    debug!(deleted, "cleared history");
    Ok(deleted)
  }

  fn delete_favorites(&mut self) -> Result<usize> {
    let tx = self.conn.transaction()?;
    let deleted = tx.execute("DELETE FROM jrp WHERE is_favorited = 1", [])?;
    tx.commit()?;
    debug!(deleted, "cleared favorites");
    Ok(deleted)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn last(&self, scope: Scope, n: usize) -> Result<Vec<Phrase>> {
    let conds: Vec<&str> = scope_filter(scope).into_iter().collect();
    let sql = latest_ascending(&where_clause(&conds), 1);
    self.query_phrases(&sql, params![limit_value(n)])
  }

  fn all(&self, scope: Scope) -> Result<Vec<Phrase>> {
    let conds: Vec<&str> = scope_filter(scope).into_iter().collect();
    let sql = format!("SELECT {COLUMNS} FROM jrp {} ORDER BY id ASC", where_clause(&conds));
    self.query_phrases(&sql, [])
  }

  fn search(&self, query: &SearchQuery) -> Result<Vec<Phrase>> {
    if query.keywords.is_empty() {
      return Ok(Vec::new());
    }

    // instr() is a case-sensitive substring test and, unlike LIKE, gives no
    // meaning to `%` or `_` inside keywords.
    let joiner = match query.mode {
      SearchMode::Or => " OR ",
      SearchMode::And => " AND ",
    };
    let matches = (1..=query.keywords.len())
      .map(|i| format!("instr(phrase, ?{i}) > 0"))
      .collect::<Vec<_>>()
      .join(joiner);
    let matches = format!("({matches})");

    let mut conds: Vec<&str> = scope_filter(query.scope).into_iter().collect();
    conds.push(&matches);
    let filter = where_clause(&conds);

    let mut values: Vec<Value> =
      query.keywords.iter().cloned().map(Value::Text).collect();

    let sql = match query.limit {
      Some(n) => {
        values.push(Value::Integer(limit_value(n)));
        latest_ascending(&filter, values.len())
      }
      None => format!("SELECT {COLUMNS} FROM jrp {filter} ORDER BY id ASC"),
    };

    self.query_phrases(&sql, params_from_iter(values))
  }

  fn get_by_ids(&self, ids: &[PhraseId]) -> Result<Vec<Phrase>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let mut rows = Vec::new();
    for chunk in ids.chunks(ID_CHUNK) {
      let placeholders = vec!["?"; chunk.len()].join(", ");
      let sql = format!("SELECT {COLUMNS} FROM jrp WHERE id IN ({placeholders})");
      rows.extend(self.query_phrases(&sql, params_from_iter(chunk))?);
    }
    rows.sort_unstable_by_key(|r| r.id);
    rows.dedup_by_key(|r| r.id);
    Ok(rows)
  }
}
