//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
  name = "jrp",
  version,
  about = "Generate, store and curate Japanese random phrases"
)]
pub struct Cli {
  /// Path to a TOML configuration file.
  #[arg(short, long, value_name = "FILE", global = true)]
  pub config: Option<PathBuf>,

  /// Options for the default action, `generate`.
  #[command(flatten)]
  pub generate: GenerateArgs,

  #[command(subcommand)]
  pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Generate phrases (the default action).
  #[command(visible_alias = "gen", visible_alias = "g")]
  Generate(GenerateArgs),

  /// Show, search and manage the generation history.
  #[command(visible_alias = "hist", visible_alias = "h")]
  History(HistoryArgs),

  /// Show, search and manage favorited phrases.
  #[command(visible_alias = "fav", visible_alias = "f")]
  Favorite(FavoriteArgs),
}

// ─── Shared argument groups ───────────────────────────────────────────────────

/// `[N]` or `-n N`; the flag wins when both are given.
#[derive(Args, Debug, Default, Clone)]
pub struct CountArgs {
  /// How many rows to work with.
  #[arg(value_name = "NUMBER")]
  pub positional: Option<usize>,

  /// How many rows to work with.
  #[arg(short = 'n', long = "number", value_name = "N")]
  pub flag: Option<usize>,
}

impl CountArgs {
  pub fn resolve(&self, default: usize) -> usize { self.flag.or(self.positional).unwrap_or(default) }
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct OutputArgs {
  /// Print only the phrases, one per line.
  #[arg(short, long)]
  pub plain: bool,

  /// Also show created/updated timestamps.
  #[arg(short = 'T', long)]
  pub timestamp: bool,
}

// ─── generate ─────────────────────────────────────────────────────────────────

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
  #[command(flatten)]
  pub count: CountArgs,

  /// Use this word as the prefix of every phrase.
  #[arg(short = 'P', long, value_name = "WORD")]
  pub prefix: Option<String>,

  /// Use this word as the suffix of every phrase.
  #[arg(short = 'S', long, value_name = "WORD")]
  pub suffix: Option<String>,

  /// Print the phrases without saving them.
  #[arg(short, long)]
  pub dry_run: bool,

  /// Generate one phrase at a time and choose what to do with each.
  #[arg(short, long, conflicts_with = "dry_run")]
  pub interactive: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

// ─── history / favorite ───────────────────────────────────────────────────────

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
  #[command(flatten)]
  pub count: CountArgs,

  /// Show every row instead of the latest N.
  #[arg(short, long)]
  pub all: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
  /// Substrings to look for in the phrase.
  #[arg(required = true, value_name = "KEYWORD")]
  pub keywords: Vec<String>,

  /// Require every keyword instead of any.
  #[arg(short = 'a', long)]
  pub and: bool,

  /// Show at most N of the latest matches.
  #[arg(short = 'n', long = "number", value_name = "N")]
  pub number: Option<usize>,

  /// Show every match.
  #[arg(short = 'A', long, conflicts_with = "number")]
  pub all: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct IdsArgs {
  /// Phrase IDs.
  #[arg(required = true, value_name = "ID")]
  pub ids: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
  /// Phrase IDs.
  #[arg(value_name = "ID", required_unless_present = "all")]
  pub ids: Vec<i64>,

  /// Apply to every row.
  #[arg(short, long, conflicts_with = "ids")]
  pub all: bool,

  /// Do not ask for confirmation.
  #[arg(long)]
  pub no_confirm: bool,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
  /// Do not ask for confirmation.
  #[arg(long)]
  pub no_confirm: bool,
}

#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct HistoryArgs {
  #[command(flatten)]
  pub show: ShowArgs,

  #[command(subcommand)]
  pub command: Option<HistoryCommand>,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
  /// Show the latest history rows (the default action).
  Show(ShowArgs),
  /// Search the history.
  Search(SearchArgs),
  /// Add history rows to the favorites.
  #[command(visible_alias = "fav")]
  Favorite(IdsArgs),
  /// Delete history rows.
  #[command(visible_alias = "rm")]
  Remove(RemoveArgs),
  /// Delete the whole history, favorites included.
  Clear(ClearArgs),
}

#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct FavoriteArgs {
  #[command(flatten)]
  pub show: ShowArgs,

  #[command(subcommand)]
  pub command: Option<FavoriteCommand>,
}

#[derive(Subcommand, Debug)]
pub enum FavoriteCommand {
  /// Show the latest favorites (the default action).
  Show(ShowArgs),
  /// Favorite history rows.
  Add(IdsArgs),
  /// Unfavorite rows.
  #[command(visible_alias = "rm")]
  Remove(RemoveArgs),
  /// Search the favorites.
  Search(SearchArgs),
  /// Delete every favorited row from the history.
  Clear(ClearArgs),
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory as _;

  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("jrp").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn definition_is_consistent() { Cli::command().debug_assert(); }

  #[test]
  fn bare_invocation_generates() {
    let cli = parse(&["5", "-P", "静かな", "--dry-run"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.generate.count.resolve(10), 5);
    assert_eq!(cli.generate.prefix.as_deref(), Some("静かな"));
    assert!(cli.generate.dry_run);
  }

  #[test]
  fn number_flag_wins_over_positional() {
    let cli = parse(&["generate", "3", "-n", "7"]);
    let Some(Command::Generate(args)) = cli.command else { panic!("expected generate") };
    assert_eq!(args.count.resolve(10), 7);
  }

  #[test]
  fn history_defaults_to_show() {
    let cli = parse(&["history", "-a"]);
    let Some(Command::History(args)) = cli.command else { panic!("expected history") };
    assert!(args.command.is_none());
    assert!(args.show.all);
  }

  #[test]
  fn search_and_flag_shares_short_a() {
    let cli = parse(&["favorite", "search", "海", "猫", "-a", "-n", "3"]);
    let Some(Command::Favorite(FavoriteArgs { command: Some(FavoriteCommand::Search(s)), .. })) =
      cli.command
    else {
      panic!("expected favorite search")
    };
    assert!(s.and);
    assert_eq!(s.number, Some(3));
    assert_eq!(s.keywords, ["海", "猫"]);
  }

  #[test]
  fn remove_needs_ids_or_all() {
    assert!(Cli::try_parse_from(["jrp", "history", "remove"]).is_err());
    let cli = parse(&["h", "rm", "-a", "--no-confirm"]);
    let Some(Command::History(HistoryArgs { command: Some(HistoryCommand::Remove(r)), .. })) =
      cli.command
    else {
      panic!("expected history remove")
    };
    assert!(r.all && r.no_confirm);
  }

  #[test]
  fn ids_must_be_integers() {
    assert!(Cli::try_parse_from(["jrp", "favorite", "add", "one"]).is_err());
  }
}
