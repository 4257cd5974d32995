//! Harness configuration schema.
//!
//! Every field carries a default so a config file only needs to name what
//! it changes. An empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use th_common::SampleParameters;

use crate::DEFAULT_INPUT_FILE;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid sampling defaults: {0}")]
    InvalidSampling(String),
}

impl From<ConfigError> for th_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidSampling(msg) => th_common::Error::InvalidSampling(msg),
            other => th_common::Error::Config {
                source: Box::new(other),
            },
        }
    }
}

/// Structural validation switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Enforce the modulo-10 checksum in the last column of each line.
    pub verify_checksum: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            verify_checksum: true,
        }
    }
}

/// Top-level harness configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Element-set file to scan.
    pub input: PathBuf,

    /// Sampling parameters used when a record carries fewer than three.
    pub sampling: SampleParameters,

    pub validation: ValidationConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            sampling: SampleParameters::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Parse and validate a TOML document. `origin` is only used in errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: HarnessConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampling
            .validate()
            .map_err(ConfigError::InvalidSampling)
    }
}
