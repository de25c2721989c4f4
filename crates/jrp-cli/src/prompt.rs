//! Interactive prompts. Readers and writers are injected so the prompts can
//! be driven from tests.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question. Anything but `y`/`yes` (including EOF) is "no".
pub fn confirm(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> io::Result<bool> {
  write!(out, "{question} [y/N]: ")?;
  out.flush()?;

  let mut line = String::new();
  input.read_line(&mut line)?;
  Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// What to do with a phrase shown in interactive generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
  Favorite,
  Save,
  Next,
  Quit,
}

/// Ask until a valid choice is entered. EOF counts as quit.
pub fn choose(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Choice> {
  loop {
    write!(out, "[f]avorite / [s]ave / [n]ext / [q]uit: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
      writeln!(out)?;
      return Ok(Choice::Quit);
    }

    match line.trim().to_ascii_lowercase().as_str() {
      "f" | "favorite" => return Ok(Choice::Favorite),
      "s" | "save" => return Ok(Choice::Save),
      "n" | "next" | "" => return Ok(Choice::Next),
      "q" | "quit" => return Ok(Choice::Quit),
      other => writeln!(out, "unknown choice {other:?}")?,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn confirm_accepts_yes_only() {
    let mut out = Vec::new();
    assert!(confirm(&mut "y\n".as_bytes(), &mut out, "ok?").unwrap());
    assert!(confirm(&mut "YES\n".as_bytes(), &mut out, "ok?").unwrap());
    assert!(!confirm(&mut "n\n".as_bytes(), &mut out, "ok?").unwrap());
    assert!(!confirm(&mut "\n".as_bytes(), &mut out, "ok?").unwrap());
    assert!(!confirm(&mut "".as_bytes(), &mut out, "ok?").unwrap());
    assert!(String::from_utf8(out).unwrap().starts_with("ok? [y/N]: "));
  }

  #[test]
  fn choose_retries_until_valid() {
    let mut out = Vec::new();
    let choice = choose(&mut "x\nf\n".as_bytes(), &mut out).unwrap();
    assert_eq!(choice, Choice::Favorite);
    assert!(String::from_utf8(out).unwrap().contains("unknown choice \"x\""));
  }

  #[test]
  fn choose_defaults() {
    let mut out = Vec::new();
    assert_eq!(choose(&mut "\n".as_bytes(), &mut out).unwrap(), Choice::Next);
    assert_eq!(choose(&mut "".as_bytes(), &mut out).unwrap(), Choice::Quit);
    assert_eq!(choose(&mut "save\n".as_bytes(), &mut out).unwrap(), Choice::Save);
  }
}
