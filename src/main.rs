use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use mark::cli::{Cli, Commands};
use mark::{color, commands};

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    match cli.command.unwrap_or(Commands::List) {
        Commands::Add { dir } => commands::add::cmd_add(dir.as_deref(), color_mode),
        Commands::List => commands::list::cmd_list(color_mode),
        Commands::Go { index } => commands::go::cmd_go(index.as_deref(), color_mode),
        Commands::Remove { index } => commands::remove::cmd_remove(&index, color_mode),
        Commands::Clear => commands::clear::cmd_clear(color_mode),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
        Commands::ShellInit { shell } => commands::shell_init::cmd_shell_init(&shell),
        Commands::Unknown(args) => commands::usage::cmd_usage(&args, color_mode),
    }
}
