//! Engine configuration loaded from TOML.
//!
//! ```toml
//! forbid_self_check = true
//! first_to_move = "black"
//! layout = "4k3/8/8/8/8/8/8/4K2R"
//! ```

use grid_chess_core::{Layout, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Rule options and starting position for a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Drop moves that leave the mover's own king attacked from
    /// [`Board::legal_moves`](crate::Board::legal_moves). Off by default:
    /// ordinary moves are then checked by geometry and special rules only,
    /// and self-check is only simulated when detecting checkmate.
    #[serde(default)]
    pub forbid_self_check: bool,
    /// Placement string of the starting position. Defaults to the
    /// standard layout.
    #[serde(default)]
    pub layout: Option<String>,
    /// Side that makes the first move. Defaults to White.
    #[serde(default = "default_first_to_move")]
    pub first_to_move: Side,
}

fn default_first_to_move() -> Side {
    Side::White
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            forbid_self_check: false,
            layout: None,
            first_to_move: default_first_to_move(),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or
    /// names unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the configured starting layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Layout`] if the placement string is malformed.
    pub fn starting_layout(&self) -> Result<Layout, ConfigError> {
        match &self.layout {
            Some(placement) => Ok(placement.parse::<Layout>()?),
            None => Ok(Layout::standard()),
        }
    }
}
