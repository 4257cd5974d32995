//! Config file resolution.
//!
//! Order: explicit `--config` path, then `TLE_HARNESS_CONFIG`, then
//! `$XDG_CONFIG_HOME/tle_harness/config.toml` when it exists, then the
//! built-in defaults. Explicitly named files must load; the XDG file is
//! only consulted if present.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::harness::{ConfigError, HarnessConfig};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "TLE_HARNESS_CONFIG";

const CONFIG_DIR_NAME: &str = "tle_harness";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Cli(p) => write!(f, "cli:{}", p.display()),
            ConfigSource::Env(p) => write!(f, "env:{}", p.display()),
            ConfigSource::Xdg(p) => write!(f, "xdg:{}", p.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// A loaded configuration together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: HarnessConfig,
    pub source: ConfigSource,
}

/// Resolve the harness configuration from the process environment.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let xdg_path = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    resolve_from(explicit, env_path, xdg_path)
}

/// Resolution with the environment lookups supplied by the caller.
pub fn resolve_from(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    xdg_path: Option<PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    let source = if let Some(path) = explicit {
        ConfigSource::Cli(path.to_path_buf())
    } else if let Some(path) = env_path {
        ConfigSource::Env(path)
    } else if let Some(path) = xdg_path.filter(|p| p.is_file()) {
        ConfigSource::Xdg(path)
    } else {
        ConfigSource::Defaults
    };

    let config = match &source {
        ConfigSource::Cli(p) | ConfigSource::Env(p) | ConfigSource::Xdg(p) => {
            HarnessConfig::load(p)?
        }
        ConfigSource::Defaults => HarnessConfig::default(),
    };
    debug!(source = %source, "resolved harness configuration");

    Ok(ResolvedConfig { config, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let dir = tempfile::tempdir().unwrap();
        let missing_xdg = dir.path().join("tle_harness").join("config.toml");
        let resolved = resolve_from(None, None, Some(missing_xdg)).unwrap();
        assert_eq!(resolved.source, ConfigSource::Defaults);
        assert_eq!(resolved.config, HarnessConfig::default());
    }

    #[test]
    fn test_cli_beats_env_and_xdg() {
        let dir = tempfile::tempdir().unwrap();
        let cli = dir.path().join("cli.toml");
        let env = dir.path().join("env.toml");
        fs::write(&cli, "input = \"from-cli.tle\"\n").unwrap();
        fs::write(&env, "input = \"from-env.tle\"\n").unwrap();

        let resolved = resolve_from(Some(&cli), Some(env), None).unwrap();
        assert_eq!(resolved.source, ConfigSource::Cli(cli));
        assert_eq!(resolved.config.input, PathBuf::from("from-cli.tle"));
    }

    #[test]
    fn test_env_beats_xdg() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join("env.toml");
        let xdg = dir.path().join("xdg.toml");
        fs::write(&env, "[validation]\nverify_checksum = false\n").unwrap();
        fs::write(&xdg, "").unwrap();

        let resolved = resolve_from(None, Some(env.clone()), Some(xdg)).unwrap();
        assert_eq!(resolved.source, ConfigSource::Env(env));
        assert!(!resolved.config.validation.verify_checksum);
    }

    #[test]
    fn test_existing_xdg_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let xdg = dir.path().join("config.toml");
        fs::write(&xdg, "[sampling]\nend = 720.0\n").unwrap();

        let resolved = resolve_from(None, None, Some(xdg.clone())).unwrap();
        assert_eq!(resolved.source, ConfigSource::Xdg(xdg));
        assert_eq!(resolved.config.sampling.end, 720.0);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_from(Some(&dir.path().join("absent.toml")), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
