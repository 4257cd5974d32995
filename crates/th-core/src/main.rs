//! tle-harness binary entry point.

use clap::Parser;
use th_core::cli::{execute, Cli};
use th_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_format);
    let code = execute(&cli);
    std::process::exit(code.as_i32());
}
