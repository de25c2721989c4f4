//! Sub-command implementations. Each maps parsed arguments onto the
//! `jrp-core` operations and renders the result.

pub mod favorite;
pub mod generate;
pub mod history;

use std::io::{self, Write};

use anyhow::{Context as _, bail};
use jrp_core::{
  history as ops,
  phrase::Phrase,
  store::{PhraseStore, Scope, SearchMode},
};
use jrp_store_sqlite::SqliteStore;

use crate::{
  cli::{SearchArgs, ShowArgs},
  config::Settings,
  prompt, render,
};

fn open_store(settings: &Settings) -> anyhow::Result<SqliteStore> {
  let path = settings.db_path()?;
  SqliteStore::open(&path).with_context(|| format!("failed to open database at {}", path.display()))
}

/// Ask before a destructive operation unless confirmation is switched off.
fn confirmed(settings: &Settings, no_confirm: bool, question: &str) -> anyhow::Result<bool> {
  if no_confirm || !settings.confirm {
    return Ok(true);
  }
  let answer = prompt::confirm(&mut io::stdin().lock(), &mut io::stdout().lock(), question)?;
  if !answer {
    render::notice("Cancelled.");
  }
  Ok(answer)
}

/// Rows for `history [N] [--all]` and `favorite [N] [--all]`.
fn select_rows<S: PhraseStore>(
  store: &S,
  scope: Scope,
  args: &ShowArgs,
  default_number: usize,
) -> jrp_core::Result<Vec<Phrase>> {
  let n = args.count.resolve(default_number);
  match (scope, args.all) {
    (Scope::AllHistory, true) => ops::get_all(store),
    (Scope::AllHistory, false) => ops::get_last(store, n),
    (Scope::FavoritesOnly, true) => ops::get_all_favorites(store),
    (Scope::FavoritesOnly, false) => ops::get_favorites_last(store, n),
  }
}

fn show<S: PhraseStore>(
  out: &mut impl Write,
  store: &S,
  scope: Scope,
  args: &ShowArgs,
  default_number: usize,
) -> anyhow::Result<()> {
  let rows = select_rows(store, scope, args, default_number)?;
  render::phrases(out, &rows, args.output)?;
  Ok(())
}

/// Matches for `history search` and `favorite search`. Empty keywords are
/// dropped before the query is built.
fn search_rows<S: PhraseStore>(
  store: &S,
  scope: Scope,
  args: &SearchArgs,
  default_number: usize,
) -> anyhow::Result<Vec<Phrase>> {
  let keywords: Vec<&str> = args
    .keywords
    .iter()
    .map(String::as_str)
    .filter(|k| !k.is_empty())
    .collect();
  if keywords.is_empty() {
    bail!("no non-empty keywords given");
  }

  let mode = if args.and { SearchMode::And } else { SearchMode::Or };
  let limit = (!args.all).then(|| args.number.unwrap_or(default_number));
  Ok(ops::search(store, scope, &keywords, mode, limit)?)
}

fn search<S: PhraseStore>(
  out: &mut impl Write,
  store: &S,
  scope: Scope,
  args: &SearchArgs,
  default_number: usize,
) -> anyhow::Result<()> {
  let rows = search_rows(store, scope, args, default_number)?;
  render::phrases(out, &rows, args.output)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use jrp_core::{favorite, phrase::PhraseDraft};

  use super::*;
  use crate::cli::{CountArgs, OutputArgs};

  fn store_with(phrases: &[&str]) -> SqliteStore {
    let mut s = SqliteStore::open_in_memory().unwrap();
    let drafts: Vec<_> = phrases.iter().map(|p| PhraseDraft::literal(*p)).collect();
    ops::insert_batch(&mut s, &drafts).unwrap();
    s
  }

  fn show_args(n: Option<usize>, all: bool) -> ShowArgs {
    ShowArgs {
      count: CountArgs { positional: n, flag: None },
      all,
      output: OutputArgs { plain: true, timestamp: false },
    }
  }

  fn search_args(keywords: &[&str], and: bool, number: Option<usize>, all: bool) -> SearchArgs {
    SearchArgs {
      keywords: keywords.iter().map(|k| k.to_string()).collect(),
      and,
      number,
      all,
      output: OutputArgs { plain: true, timestamp: false },
    }
  }

  #[test]
  fn show_uses_default_number() {
    let s = store_with(&["1", "2", "3", "4"]);
    let rows = select_rows(&s, Scope::AllHistory, &show_args(None, false), 2).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].phrase, "4");
  }

  #[test]
  fn show_all_ignores_number() {
    let s = store_with(&["1", "2", "3"]);
    let rows = select_rows(&s, Scope::AllHistory, &show_args(Some(1), true), 2).unwrap();
    assert_eq!(rows.len(), 3);
  }

  #[test]
  fn show_favorites_renders_plain() {
    let mut s = store_with(&["a", "b", "c"]);
    favorite::add_by_ids(&mut s, &[1, 3]);

    let mut out = Vec::new();
    show(&mut out, &s, Scope::FavoritesOnly, &show_args(None, false), 10).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a\nc\n");
  }

  #[test]
  fn search_drops_empty_keywords() {
    let s = store_with(&["apple", "banana"]);
    let rows = search_rows(&s, Scope::AllHistory, &search_args(&["", "app"], false, None, false), 10)
      .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(search_rows(&s, Scope::AllHistory, &search_args(&[""], false, None, false), 10).is_err());
  }

  #[test]
  fn search_limit_and_all() {
    let s = store_with(&["k1", "k2", "k3"]);
    let limited = search_rows(&s, Scope::AllHistory, &search_args(&["k"], false, Some(2), false), 10)
      .unwrap();
    assert_eq!(limited.len(), 2);
    let all = search_rows(&s, Scope::AllHistory, &search_args(&["k"], false, None, true), 1).unwrap();
    assert_eq!(all.len(), 3);
  }

  #[test]
  fn search_and_mode() {
    let s = store_with(&["apple", "banana"]);
    let mut out = Vec::new();
    search(
      &mut out,
      &s,
      Scope::AllHistory,
      &search_args(&["app", "zan"], true, None, false),
      10,
    )
    .unwrap();
    assert!(out.is_empty());
  }
}
