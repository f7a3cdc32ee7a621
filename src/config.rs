//! Board file loading
//!
//! Boards are plain TOML: optional `round`, `interval_ms`, and `logo_base`
//! keys plus a `[[picks]]` array. Every key has a default, so an empty file
//! is valid (and reveals nothing). The built-in board used when no file is
//! given lives in [`Board::default`].

use crate::board::{Board, Pick};
use crate::error::{DraftboardError, Result};
use crate::reveal::{DEFAULT_LOGO_BASE, DEFAULT_REVEAL_INTERVAL};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Deserialized board file.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_round")]
    pub round: u32,

    /// Delay between reveals, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Base path prepended to team logo slugs
    #[serde(default = "default_logo_base")]
    pub logo_base: String,

    #[serde(default)]
    pub picks: Vec<Pick>,
}

fn default_round() -> u32 {
    1
}

fn default_interval_ms() -> u64 {
    DEFAULT_REVEAL_INTERVAL.as_millis() as u64
}

fn default_logo_base() -> String {
    DEFAULT_LOGO_BASE.to_string()
}

impl Default for BoardConfig {
    /// Mirrors the built-in six-pick round 1 board
    fn default() -> Self {
        let board = Board::default();
        Self {
            round: board.round,
            interval_ms: default_interval_ms(),
            logo_base: default_logo_base(),
            picks: board.picks,
        }
    }
}

impl BoardConfig {
    /// Load and validate a board file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DraftboardError::BoardFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config: BoardConfig = toml::from_str(&contents).map_err(|e| {
            DraftboardError::config(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a board from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: BoardConfig =
            toml::from_str(contents).map_err(|e| DraftboardError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (idx, pick) in self.picks.iter().enumerate() {
            if pick.name.trim().is_empty() {
                return Err(DraftboardError::invalid_pick(format!(
                    "pick {} has an empty name",
                    idx + 1
                )));
            }
            if pick.college.trim().is_empty() {
                return Err(DraftboardError::invalid_pick(format!(
                    "pick {} ({}) has an empty college",
                    idx + 1,
                    pick.name
                )));
            }
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn into_board(self) -> Board {
        Board::new(self.round, self.picks)
    }
}
