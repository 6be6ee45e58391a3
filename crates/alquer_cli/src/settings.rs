//! Settings file and command-line overrides.
//!
//! A settings file is TOML with optional `[game]` and `[solver]` tables:
//!
//! ```toml
//! [game]
//! width = 5
//! height = 5
//! lines = 1
//! start = "second"
//!
//! [solver]
//! memo_limit = 1000000
//! ```
//!
//! Missing keys take their defaults; flags given on the command line win
//! over the file.

use std::fs;
use std::path::{Path, PathBuf};

use alquer_core::{ConfigError, GameConfig, Side};
use exhaustive_solver::SolverConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub game: GameConfig,
    pub solver: SolverConfig,
}

/// Values given on the command line; `None` keeps the file or default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub lines: Option<u8>,
    pub start: Option<Side>,
    pub memo_limit: Option<usize>,
}

impl Settings {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Apply overrides, normalize the row count and check the board.
    pub fn resolve(mut self, overrides: &Overrides) -> Result<Self, SettingsError> {
        let game = &mut self.game;
        if let Some(width) = overrides.width {
            game.width = width;
        }
        if let Some(height) = overrides.height {
            game.height = height;
        }
        if let Some(lines) = overrides.lines {
            game.lines = lines;
        }
        if let Some(start) = overrides.start {
            game.start = start;
        }
        if overrides.memo_limit.is_some() {
            self.solver.memo_limit = overrides.memo_limit;
        }

        self.game = self.game.normalized();
        self.game.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
