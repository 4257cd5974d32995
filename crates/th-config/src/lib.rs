//! TLE harness configuration loading and validation.
//!
//! This crate provides:
//! - Typed configuration (`HarnessConfig`) read from TOML
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation of sampling defaults

pub mod harness;
pub mod resolve;

pub use harness::{ConfigError, HarnessConfig, ValidationConfig};
pub use resolve::{resolve_config, ConfigSource, ResolvedConfig, CONFIG_ENV_VAR};

/// File name used for the harness input when nothing else is configured.
pub const DEFAULT_INPUT_FILE: &str = "SGP4-VER.TLE";
