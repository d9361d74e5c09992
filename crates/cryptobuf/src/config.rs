//! Runtime configuration.
//!
//! ```toml
//! hex_case = "upper"
//! max_random_length = 1048576
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Letter case used when encoding hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CryptoBufferConfig {
    pub hex_case: HexCase,
    /// Upper bound on `generate_random` lengths.
    pub max_random_length: u32,
}

impl CryptoBufferConfig {
    pub const DEFAULT_MAX_RANDOM_LENGTH: u32 = 16 * 1024 * 1024;

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

impl Default for CryptoBufferConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Lower,
            max_random_length: Self::DEFAULT_MAX_RANDOM_LENGTH,
        }
    }
}
