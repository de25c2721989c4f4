//! `jrp`: generate, store and curate Japanese random phrases.
//!
//! # Usage
//!
//! ```text
//! jrp                      # generate 10 phrases and save them
//! jrp 3 -P 静かな           # 3 phrases with a fixed prefix
//! jrp history search 海 猫  # phrases containing either keyword
//! jrp favorite add 1 2 3
//! ```

mod cli;
mod commands;
mod config;
mod prompt;
mod render;

use std::process::ExitCode;

use clap::Parser as _;
use crossterm::style::Stylize as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Settings;

fn main() -> ExitCode {
  // Logs go to stderr so `--plain` output stays pipeable.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      let styling = render::styling_enabled(&std::io::stderr());
      let label = render::styled("error:".red().bold(), styling);
      eprintln!("{label} {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
  let settings = Settings::load(cli.config.as_deref())?;
  tracing::debug!(?settings, "loaded settings");

  match cli.command {
    None => commands::generate::run(&settings, cli.generate),
    Some(Command::Generate(args)) => commands::generate::run(&settings, args),
    Some(Command::History(args)) => commands::history::run(&settings, args),
    Some(Command::Favorite(args)) => commands::favorite::run(&settings, args),
  }
}
