//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid config:
//!
//! ```toml
//! default_depth = 6
//! max_depth = 32
//! log_filter = "info"
//!
//! [search]
//! max_check_extensions = 16
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::search::MAX_PLY;

/// Knobs that change how the searcher explores the tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Check extensions allowed along a single line from the root.
    pub max_check_extensions: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_check_extensions: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Depth used by `go` when no depth is given.
    pub default_depth: u8,
    /// Upper bound for any requested depth.
    pub max_depth: u8,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: 6,
            max_depth: 32,
            log_filter: "info".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth as usize > MAX_PLY {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be in 1..={MAX_PLY}, got {}",
                self.max_depth
            )));
        }
        if self.default_depth == 0 || self.default_depth > self.max_depth {
            return Err(ConfigError::Invalid(format!(
                "default_depth must be in 1..={}, got {}",
                self.max_depth, self.default_depth
            )));
        }
        Ok(())
    }

    /// Bring a requested depth into `1..=max_depth`.
    pub fn clamp_depth(&self, depth: u32) -> u8 {
        depth.clamp(1, self.max_depth as u32) as u8
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
