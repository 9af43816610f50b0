//! Usage fallback for unrecognized commands

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::Cli;
use crate::color;

/// Print usage to stdout after an unrecognized command
///
/// # Errors
/// Never fails; the signature matches the other command handlers
pub fn cmd_usage(args: &[String], color_mode: color::ColorMode) -> Result<()> {
    if let Some(name) = args.first() {
        eprintln!("{}", color::warn(color_mode, format!("Unknown command: {name}")));
    }

    println!("{}", Cli::command().render_help());
    Ok(())
}
