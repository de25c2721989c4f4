//! `jrp history`: show, search, favorite and delete history rows.

use std::{io, process::ExitCode};

use jrp_core::{Status, favorite, history, store::Scope};

use super::{confirmed, open_store, search, show};
use crate::{
  cli::{HistoryArgs, HistoryCommand},
  config::Settings,
  render::{self, Messages},
};

const FAVORITE_ADD: Messages = Messages {
  succeeded: "Favorited.",
  partial:   "Favorited some of the phrases; the rest were missing or already favorited.",
  none:      "Nothing to favorite; the IDs were missing or already favorited.",
  failed:    "Failed to favorite:",
};

const REMOVE: Messages = Messages {
  succeeded: "Removed from the history.",
  partial:   "Removed some of the phrases; the rest did not exist.",
  none:      "Nothing to remove; the IDs did not exist.",
  failed:    "Failed to remove:",
};

const CLEAR: Messages = Messages {
  succeeded: "Cleared the history.",
  partial:   "Cleared the history.",
  none:      "The history is already empty.",
  failed:    "Failed to clear the history:",
};

const CLEAR_QUESTION: &str = "Delete the whole history, favorites included?";

pub fn run(settings: &Settings, args: HistoryArgs) -> anyhow::Result<ExitCode> {
  let mut store = open_store(settings)?;
  let mut out = io::stdout().lock();
  let n = settings.default_number;

  let code = match args.command {
    None => {
      show(&mut out, &store, Scope::AllHistory, &args.show, n)?;
      ExitCode::SUCCESS
    }
    Some(HistoryCommand::Show(show_args)) => {
      show(&mut out, &store, Scope::AllHistory, &show_args, n)?;
      ExitCode::SUCCESS
    }
    Some(HistoryCommand::Search(search_args)) => {
      search(&mut out, &store, Scope::AllHistory, &search_args, n)?;
      ExitCode::SUCCESS
    }
    Some(HistoryCommand::Favorite(ids)) => {
      render::report(&favorite::add_by_ids(&mut store, &ids.ids), &FAVORITE_ADD)
    }
    Some(HistoryCommand::Remove(remove)) if remove.all => {
      if !confirmed(settings, remove.no_confirm, CLEAR_QUESTION)? {
        return Ok(ExitCode::SUCCESS);
      }
      render::report(&Status::from(favorite::clear_history(&mut store)), &CLEAR)
    }
    Some(HistoryCommand::Remove(remove)) => {
      render::report(&history::delete_by_ids(&mut store, &remove.ids), &REMOVE)
    }
    Some(HistoryCommand::Clear(clear)) => {
      if !confirmed(settings, clear.no_confirm, CLEAR_QUESTION)? {
        return Ok(ExitCode::SUCCESS);
      }
      render::report(&Status::from(favorite::clear_history(&mut store)), &CLEAR)
    }
  };
  Ok(code)
}
