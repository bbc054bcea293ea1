//! Comparator configuration via `ownstate.toml`
//!
//! The strict-mode flag is resolved once, when the comparator is built, and
//! never changes afterwards. Without a config file the flag follows the build
//! profile: debug builds are strict, release builds are lenient.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Config file name conventionally placed next to the application data.
pub const CONFIG_FILE_NAME: &str = "ownstate.toml";

/// Errors while loading or writing comparator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Failed to access config file '{path}': {source}")]
    Io {
        /// Path of the config file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

fn default_strict_mode() -> bool {
    cfg!(debug_assertions)
}

/// Comparator configuration loaded from `ownstate.toml`.
///
/// # Example
///
/// ```toml
/// # Strict mode: verify hash matches with full equality and log collisions.
/// # Defaults to true in debug builds and false in release builds.
/// strict_mode = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparatorConfig {
    /// Verify hash matches with full member equality
    #[serde(default = "default_strict_mode")]
    pub strict_mode: bool,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            strict_mode: default_strict_mode(),
        }
    }
}

impl ComparatorConfig {
    /// Create a config with build-profile defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with strict mode on
    pub fn strict() -> Self {
        Self { strict_mode: true }
    }

    /// Config with strict mode off (hash equality accepted as equality)
    pub fn lenient() -> Self {
        Self { strict_mode: false }
    }

    /// Set strict mode
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ownstate comparator configuration
#
# Strict mode: when two states hash equal, also compare their members one by
# one. A mismatch is a hash collision or a member type whose equality and
# hash disagree; it is logged at error level and the states are treated as
# different.
# Defaults to true in debug builds and false in release builds.
# strict_mode = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// Missing keys fall back to the build-profile defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ComparatorConfig = toml::from_str(content)?;
        debug!(strict_mode = config.strict_mode, "Parsed comparator config");
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            strict_mode = config.strict_mode,
            "Loaded comparator config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
