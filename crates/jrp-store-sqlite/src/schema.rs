//! SQL schema and migrations for the jrp SQLite store.
//!
//! `MIGRATIONS[i]` upgrades a database from `user_version = i` to `i + 1`.
//! Pending migrations run in a single transaction on open.

/// Connection-level settings; run outside any transaction.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// v1: the phrase history. Favorites are the rows with `is_favorited = 1`.
const V1: &str = "
CREATE TABLE IF NOT EXISTS jrp (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    phrase       TEXT NOT NULL,
    prefix       TEXT,
    suffix       TEXT,
    is_favorited INTEGER NOT NULL DEFAULT 0 CHECK (is_favorited IN (0, 1)),
    created_at   TEXT NOT NULL,   -- RFC 3339 UTC, whole seconds
    updated_at   TEXT NOT NULL    -- rewritten on every flag change
);

CREATE INDEX IF NOT EXISTS jrp_is_favorited_idx ON jrp(is_favorited);
";

pub const MIGRATIONS: &[&str] = &[V1];

/// The schema version a freshly migrated database ends up at.
pub const LATEST_VERSION: i64 = MIGRATIONS.len() as i64;
