//! Runtime settings.
//!
//! Layers, lowest priority first: built-in defaults, the TOML file given
//! with `--config` (or `<config dir>/jrp/config.toml` when it exists), and
//! `JRP_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, anyhow};
use serde::Deserialize;

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "jrp.db";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Directory holding `jrp.db`; defaults to `<local data dir>/jrp`.
  pub data_dir:       Option<PathBuf>,
  /// Row count used when no number is given.
  pub default_number: usize,
  /// Ask before destructive operations. `false` acts like `--no-confirm`.
  pub confirm:        bool,
}

impl Default for Settings {
  fn default() -> Self { Self { data_dir: None, default_number: 10, confirm: true } }
}

impl Settings {
  pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder();

    builder = match explicit {
      Some(path) => builder.add_source(config::File::from(path).required(true)),
      None => match default_config_path() {
        Some(path) => builder.add_source(config::File::from(path).required(false)),
        None => builder,
      },
    };

    builder
      .add_source(config::Environment::with_prefix("JRP"))
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("invalid configuration")
  }

  /// Where the database file lives.
  pub fn db_path(&self) -> anyhow::Result<PathBuf> {
    let dir = match &self.data_dir {
      Some(dir) => expand_tilde(dir),
      None => dirs::data_local_dir()
        .ok_or_else(|| anyhow!("could not determine the local data directory"))?
        .join("jrp"),
    };
    Ok(dir.join(DB_FILE_NAME))
  }
}

fn default_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|d| d.join("jrp").join("config.toml"))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  if let Ok(rest) = path.strip_prefix("~")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn defaults() {
    let s = Settings::default();
    assert_eq!(s.default_number, 10);
    assert!(s.confirm);
    assert!(s.data_dir.is_none());
  }

  #[test]
  fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "data_dir = \"/tmp/jrp-test\"\ndefault_number = 3\nconfirm = false").unwrap();

    let s = Settings::load(Some(file.path())).unwrap();
    assert_eq!(s.default_number, 3);
    assert!(!s.confirm);
    assert_eq!(s.db_path().unwrap(), PathBuf::from("/tmp/jrp-test/jrp.db"));
  }

  #[test]
  fn missing_explicit_file_is_an_error() {
    assert!(Settings::load(Some(Path::new("/nonexistent/jrp.toml"))).is_err());
  }

  #[test]
  fn tilde_is_expanded() {
    let expanded = expand_tilde(Path::new("~/jrp"));
    if let Some(home) = dirs::home_dir() {
      assert_eq!(expanded, home.join("jrp"));
    }
    assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
  }
}
