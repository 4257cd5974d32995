//! Command-line surface for tle-harness.
//!
//! With no arguments the harness reads `SGP4-VER.TLE` from the working
//! directory using the built-in defaults.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use th_config::resolve_config;
use tracing::{debug, error};

use crate::exit_codes::ExitCode;
use crate::logging::LogFormat;
use crate::propagate::Sgp4Backend;
use crate::runner::Harness;

/// Run SGP4 over a two-line element test file and print sampled states.
#[derive(Parser, Debug)]
#[command(name = "tle-harness", version, about)]
pub struct Cli {
    /// Element-set file to scan (overrides the configured input)
    #[arg(env = "TLE_HARNESS_INPUT", value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Harness configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Diagnostic log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Resolve configuration and run the harness, writing samples to stdout.
pub fn execute(cli: &Cli) -> ExitCode {
    let resolved = match resolve_config(cli.config.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            let err = th_common::Error::from(e);
            error!(code = err.code(), "{err}");
            return ExitCode::ConfigError;
        }
    };
    debug!(source = %resolved.source, "configuration loaded");

    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| resolved.config.input.clone());
    let backend = Sgp4Backend::new(resolved.config.validation.verify_checksum);
    let harness = Harness::new(backend, &resolved.config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = harness.run_path(&input, &mut out) {
        error!(code = err.code(), "{err}");
    }
    ExitCode::Clean
}
