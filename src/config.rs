
//! User-facing settings for a calculator session.

use serde::Deserialize;
use thiserror::Error;

use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ERROR_MARKER: &str = "ERROR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// Text shown in place of a result when an expression cannot be
  /// evaluated.
  pub error_marker: String,
  /// Report the postfix form of each expression before it is solved.
  pub show_postfix: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("Could not read settings file {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Invalid settings file {}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

impl Settings {
  /// Parses settings from TOML text. Missing keys keep their default
  /// values.
  pub fn from_toml_str(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
  }

  pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
      path: path.to_owned(),
      source,
    })?;
    Settings::from_toml_str(&text).map_err(|source| SettingsError::Parse {
      path: path.to_owned(),
      source,
    })
  }
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      error_marker: String::from(DEFAULT_ERROR_MARKER),
      show_postfix: false,
    }
  }
}
