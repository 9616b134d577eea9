//! CLI module for gitinbit.
//!
//! The command line drives a [`crate::site::Site`] the way the browser would:
//! it loads the content file, restores persisted preferences, reports a
//! viewport width, and prints what the site would display.

mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::GitinbitError;

/// Runs the CLI.
///
/// Parses command-line arguments, installs logging and executes the
/// appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), GitinbitError> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    cli.execute()
}
