//! `jrp [generate]`: compose phrases and save them to the history.

use std::{
  io::{self, BufRead, Write},
  process::ExitCode,
};

use anyhow::Context as _;
use crossterm::style::Stylize as _;
use jrp_core::{
  draw::{OsSeededDraw, RandomDraw},
  favorite,
  generator::{self, MAX_BATCH},
  history,
  source::WordSource,
  store::PhraseStore,
};
use tracing::warn;

use super::open_store;
use crate::{
  cli::GenerateArgs,
  config::Settings,
  prompt::{self, Choice},
  render::{self, Messages},
};

const FAVORITED: Messages = Messages {
  succeeded: "Saved and favorited.",
  partial:   "Saved, but could not favorite every phrase.",
  none:      "Saved, but nothing was favorited.",
  failed:    "Saved, but favoriting failed:",
};

pub fn run(settings: &Settings, args: GenerateArgs) -> anyhow::Result<ExitCode> {
  let words = jrp_words::embedded()
    .map_err(jrp_core::Error::from)
    .context("failed to load the word dictionary")?;
  let mut draw = OsSeededDraw::new();

  if args.interactive {
    let mut store = open_store(settings)?;
    let stdin = io::stdin();
    return interactive(
      &mut stdin.lock(),
      &mut io::stdout().lock(),
      &mut store,
      words,
      &mut draw,
      &args,
    );
  }

  let n = args.count.resolve(settings.default_number);
  if n > MAX_BATCH {
    warn!(requested = n, max = MAX_BATCH, "clamping batch size");
  }
  let drafts = generator::generate(
    words,
    &mut draw,
    n,
    args.prefix.as_deref(),
    args.suffix.as_deref(),
  )?;

  let mut out = io::stdout().lock();
  if args.dry_run {
    render::drafts(&mut out, &drafts, args.output.plain)?;
    return Ok(ExitCode::SUCCESS);
  }

  let mut store = open_store(settings)?;
  let rows = history::insert_batch(&mut store, &drafts)?;
  render::phrases(&mut out, &rows, args.output)?;
  Ok(ExitCode::SUCCESS)
}

/// Show one phrase at a time until the user quits. Only phrases the user
/// saves or favorites reach the history.
fn interactive<S, W, R>(
  input: &mut impl BufRead,
  out: &mut impl Write,
  store: &mut S,
  words: &W,
  draw: &mut R,
  args: &GenerateArgs,
) -> anyhow::Result<ExitCode>
where
  S: PhraseStore,
  W: WordSource + ?Sized,
  R: RandomDraw + ?Sized,
{
  let styling = render::styling_enabled(&io::stdout());
  let mut code = ExitCode::SUCCESS;
  loop {
    let Some(draft) =
      generator::generate(words, draw, 1, args.prefix.as_deref(), args.suffix.as_deref())?
        .into_iter()
        .next()
    else {
      return Ok(code);
    };
    writeln!(out, "{}", render::styled(draft.phrase.as_str().bold(), styling))?;

    match prompt::choose(input, out)? {
      Choice::Favorite => {
        let rows = history::insert_batch(store, &[draft])?;
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let status = favorite::add_by_ids(store, &ids);
        render::report(&status, &FAVORITED);
        if status.is_failed() {
          code = ExitCode::FAILURE;
        }
      }
      Choice::Save => {
        history::insert_batch(store, &[draft])?;
        render::success("Saved.");
      }
      Choice::Next => {}
      Choice::Quit => return Ok(code),
    }
  }
}

#[cfg(test)]
mod tests {
  use jrp_core::{
    phrase::Phrase,
    store::Scope,
    word::{PartOfSpeech, Word},
  };
  use jrp_store_sqlite::SqliteStore;
  use jrp_words::Dictionary;

  use super::*;

  fn dictionary() -> Dictionary {
    Dictionary::from_words([
      Word { id: 1, lemma: "静かな".into(), pos: PartOfSpeech::Adjective },
      Word { id: 2, lemma: "海".into(), pos: PartOfSpeech::Noun },
    ])
  }

  fn drive(script: &str, store: &mut SqliteStore) -> String {
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    interactive(
      &mut input,
      &mut out,
      store,
      &dictionary(),
      &mut OsSeededDraw::new(),
      &GenerateArgs::default(),
    )
    .unwrap();
    String::from_utf8(out).unwrap()
  }

  fn all(store: &SqliteStore) -> Vec<Phrase> { store.all(Scope::AllHistory).unwrap() }

  #[test]
  fn interactive_saves_only_chosen_phrases() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let out = drive("n\ns\nf\nq\n", &mut store);

    assert!(out.contains("静かな海"));
    let rows = all(&store);
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].is_favorited);
    assert!(rows[1].is_favorited);
    assert_eq!(rows[1].prefix.as_deref(), Some("静かな"));
    assert_eq!(rows[1].suffix.as_deref(), Some("海"));
  }

  #[test]
  fn interactive_stops_at_eof() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    drive("", &mut store);
    assert!(all(&store).is_empty());
  }
}
