//! Terminal output: aligned tables, plain lines and coloured status
//! messages.

use std::{
  env,
  fmt::Display,
  io::{self, IsTerminal, Write},
  process::ExitCode,
};

use chrono::{DateTime, Local, Utc};
use crossterm::style::{StyledContent, Stylize as _};
use jrp_core::{
  Status,
  phrase::{Phrase, PhraseDraft},
};
use unicode_width::UnicodeWidthStr as _;

use crate::cli::OutputArgs;

const FAVORITE_MARK: &str = "○";

// ─── Styling ─────────────────────────────────────────────────────────────────

/// ANSI styling goes only to terminals, and never when `NO_COLOR` is set.
pub fn styling_enabled(stream: &impl IsTerminal) -> bool {
  stream.is_terminal() && env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// `content` with its style applied, or bare when styling is off.
pub fn styled<D: Display>(content: StyledContent<D>, enabled: bool) -> String {
  if enabled { content.to_string() } else { content.content().to_string() }
}

// ─── Table ────────────────────────────────────────────────────────────────────

/// A minimal table whose columns are padded by display width, so
/// double-width Japanese glyphs line up.
struct Table {
  header: Vec<&'static str>,
  rows:   Vec<Vec<String>>,
}

impl Table {
  fn widths(&self) -> Vec<usize> {
    let mut widths: Vec<usize> = self.header.iter().map(|h| h.width()).collect();
    for row in &self.rows {
      for (w, cell) in widths.iter_mut().zip(row) {
        *w = (*w).max(cell.width());
      }
    }
    widths
  }

  fn write(&self, out: &mut impl Write, styling: bool) -> io::Result<()> {
    let widths = self.widths();
    let last = widths.len().saturating_sub(1);

    for (i, (h, w)) in self.header.iter().zip(&widths).enumerate() {
      let padded = pad(h, *w, i == last);
      write!(out, "{}", styled(padded.bold().green(), styling))?;
      if i != last {
        write!(out, "  ")?;
      }
    }
    writeln!(out)?;

    for row in &self.rows {
      let line = row
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (cell, w))| pad(cell, *w, i == last))
        .collect::<Vec<_>>()
        .join("  ");
      writeln!(out, "{line}")?;
    }
    Ok(())
  }
}

fn pad(cell: &str, width: usize, is_last: bool) -> String {
  if is_last {
    return cell.to_owned();
  }
  let fill = width.saturating_sub(cell.width());
  format!("{cell}{}", " ".repeat(fill))
}

fn timestamp(dt: DateTime<Utc>) -> String {
  dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

// ─── Phrases ──────────────────────────────────────────────────────────────────

/// Print stored rows as a table, or one phrase per line with `--plain`.
pub fn phrases(out: &mut impl Write, rows: &[Phrase], opts: OutputArgs) -> io::Result<()> {
  write_phrases(out, rows, opts, styling_enabled(&io::stdout()))
}

fn write_phrases(
  out: &mut impl Write,
  rows: &[Phrase],
  opts: OutputArgs,
  styling: bool,
) -> io::Result<()> {
  if opts.plain {
    for row in rows {
      writeln!(out, "{}", row.phrase)?;
    }
    return Ok(());
  }

  if rows.is_empty() {
    return writeln!(out, "{}", styled("No phrases to show.".yellow(), styling));
  }

  let mut header = vec!["ID", "PHRASE", "PREFIX", "SUFFIX", "FAVORITED"];
  if opts.timestamp {
    header.extend(["CREATED AT", "UPDATED AT"]);
  }

  let rows = rows
    .iter()
    .map(|r| {
      let mut cells = vec![
        r.id.to_string(),
        r.phrase.clone(),
        r.prefix.clone().unwrap_or_default(),
        r.suffix.clone().unwrap_or_default(),
        if r.is_favorited { FAVORITE_MARK.to_owned() } else { String::new() },
      ];
      if opts.timestamp {
        cells.push(timestamp(r.created_at));
        cells.push(timestamp(r.updated_at));
      }
      cells
    })
    .collect();

  Table { header, rows }.write(out, styling)
}

/// Print unsaved drafts.
pub fn drafts(out: &mut impl Write, drafts: &[PhraseDraft], plain: bool) -> io::Result<()> {
  if plain {
    for d in drafts {
      writeln!(out, "{}", d.phrase)?;
    }
    return Ok(());
  }

  let rows = drafts
    .iter()
    .map(|d| {
      vec![
        d.phrase.clone(),
        d.prefix.clone().unwrap_or_default(),
        d.suffix.clone().unwrap_or_default(),
      ]
    })
    .collect();
  Table { header: vec!["PHRASE", "PREFIX", "SUFFIX"], rows }.write(out, styling_enabled(&io::stdout()))
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// What to tell the user for each [`Status`] of one operation.
pub struct Messages {
  pub succeeded: &'static str,
  pub partial:   &'static str,
  pub none:      &'static str,
  pub failed:    &'static str,
}

pub fn success(msg: &str) { println!("{}", styled(msg.green(), styling_enabled(&io::stdout()))); }

pub fn notice(msg: &str) { println!("{}", styled(msg.yellow(), styling_enabled(&io::stdout()))); }

pub fn failure(msg: &str, err: &dyn std::error::Error) {
  eprintln!("{} {err}", styled(msg.red(), styling_enabled(&io::stderr())));
}

/// Print the message for `status`; `Failed` maps to a non-zero exit code.
pub fn report(status: &Status, messages: &Messages) -> ExitCode {
  match status {
    Status::Succeeded => success(messages.succeeded),
    Status::PartiallySucceeded => notice(messages.partial),
    Status::None => notice(messages.none),
    Status::Failed(e) => {
      failure(messages.failed, e);
      return ExitCode::FAILURE;
    }
  }
  ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;
  use crossterm::style::Stylize as _;

  use super::*;

  fn row(id: i64, phrase: &str, fav: bool) -> Phrase {
    let at = Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).unwrap();
    Phrase {
      id,
      phrase: phrase.into(),
      prefix: None,
      suffix: None,
      is_favorited: fav,
      created_at: at,
      updated_at: at,
    }
  }

  fn render(rows: &[Phrase], opts: OutputArgs) -> String {
    let mut out = Vec::new();
    write_phrases(&mut out, rows, opts, false).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn plain_prints_phrases_only() {
    let text = render(
      &[row(1, "静かな海", false), row(2, "赤い猫", true)],
      OutputArgs { plain: true, timestamp: false },
    );
    assert_eq!(text, "静かな海\n赤い猫\n");
  }

  #[test]
  fn table_aligns_wide_glyphs() {
    let text = render(&[row(1, "海", true), row(22, "ab", false)], OutputArgs::default());
    let lines: Vec<_> = text.lines().skip(1).collect();
    // "海" is two columns wide, like "ab", so FAVORITED starts at the same column.
    assert_eq!(lines[0].width(), lines[1].width() + FAVORITE_MARK.width());
    assert!(lines[0].starts_with("1   海"));
    assert!(lines[1].starts_with("22  ab"));
  }

  #[test]
  fn timestamp_columns_are_optional() {
    let without = render(&[row(1, "a", false)], OutputArgs::default());
    let with = render(&[row(1, "a", false)], OutputArgs { plain: false, timestamp: true });
    assert!(!without.contains("CREATED AT"));
    assert!(with.contains("CREATED AT"));
  }

  #[test]
  fn empty_table_says_so() {
    assert!(render(&[], OutputArgs::default()).contains("No phrases to show."));
  }

  #[test]
  fn drafts_plain() {
    let mut out = Vec::new();
    drafts(&mut out, &[PhraseDraft::literal("test")], true).unwrap();
    assert_eq!(out, b"test\n");
  }

  #[test]
  fn unstyled_table_has_no_escape_codes() {
    let text = render(&[row(1, "海", true)], OutputArgs::default());
    assert!(!text.contains('\u{1b}'));
    assert!(text.starts_with("ID  PHRASE"));
    assert!(!render(&[], OutputArgs::default()).contains('\u{1b}'));
  }

  #[test]
  fn styled_table_header_is_escaped() {
    let mut out = Vec::new();
    write_phrases(&mut out, &[row(1, "海", false)], OutputArgs::default(), true).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().next().unwrap().contains('\u{1b}'));
    assert!(!text.lines().nth(1).unwrap().contains('\u{1b}'));
  }

  #[test]
  fn styled_strips_when_disabled() {
    assert_eq!(styled("ok".bold(), false), "ok");
    assert_ne!(styled("ok".bold(), true), "ok");
  }
}
