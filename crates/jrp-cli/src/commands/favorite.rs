//! `jrp favorite`: show, search, add and remove favorites.

use std::{io, process::ExitCode};

use jrp_core::{Status, favorite, store::Scope};

use super::{confirmed, open_store, search, show};
use crate::{
  cli::{FavoriteArgs, FavoriteCommand},
  config::Settings,
  render::{self, Messages},
};

const ADD: Messages = Messages {
  succeeded: "Favorited.",
  partial:   "Favorited some of the phrases; the rest were missing or already favorited.",
  none:      "Nothing to favorite; the IDs were missing or already favorited.",
  failed:    "Failed to favorite:",
};

const REMOVE: Messages = Messages {
  succeeded: "Unfavorited.",
  partial:   "Unfavorited some of the phrases; the rest were missing or not favorited.",
  none:      "Nothing to unfavorite; the IDs were missing or not favorited.",
  failed:    "Failed to unfavorite:",
};

const REMOVE_ALL: Messages = Messages {
  succeeded: "Unfavorited every phrase.",
  partial:   "Unfavorited every phrase.",
  none:      "There are no favorites.",
  failed:    "Failed to unfavorite:",
};

const CLEAR: Messages = Messages {
  succeeded: "Deleted every favorited phrase from the history.",
  partial:   "Deleted every favorited phrase from the history.",
  none:      "There are no favorites.",
  failed:    "Failed to delete the favorites:",
};

pub fn run(settings: &Settings, args: FavoriteArgs) -> anyhow::Result<ExitCode> {
  let mut store = open_store(settings)?;
  let mut out = io::stdout().lock();
  let n = settings.default_number;

  let code = match args.command {
    None => {
      show(&mut out, &store, Scope::FavoritesOnly, &args.show, n)?;
      ExitCode::SUCCESS
    }
    Some(FavoriteCommand::Show(show_args)) => {
      show(&mut out, &store, Scope::FavoritesOnly, &show_args, n)?;
      ExitCode::SUCCESS
    }
    Some(FavoriteCommand::Search(search_args)) => {
      search(&mut out, &store, Scope::FavoritesOnly, &search_args, n)?;
      ExitCode::SUCCESS
    }
    Some(FavoriteCommand::Add(ids)) => render::report(&favorite::add_by_ids(&mut store, &ids.ids), &ADD),
    Some(FavoriteCommand::Remove(remove)) if remove.all => {
      if !confirmed(settings, remove.no_confirm, "Unfavorite every phrase?")? {
        return Ok(ExitCode::SUCCESS);
      }
      render::report(&favorite::remove_all(&mut store), &REMOVE_ALL)
    }
    Some(FavoriteCommand::Remove(remove)) => {
      render::report(&favorite::remove_by_ids(&mut store, &remove.ids), &REMOVE)
    }
    Some(FavoriteCommand::Clear(clear)) => {
      let question = "Delete every favorited phrase from the history?";
      if !confirmed(settings, clear.no_confirm, question)? {
        return Ok(ExitCode::SUCCESS);
      }
      render::report(&Status::from(favorite::clear_favorites_only(&mut store)), &CLEAR)
    }
  };
  Ok(code)
}
