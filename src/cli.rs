use clap::{Parser, Subcommand, ValueHint};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;
use std::path::Path;

use crate::domain::path::display_path;
use crate::store::MarkStore;

/// Directory bookmark manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    // Defaults to `list` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add current or specified directory
    Add {
        /// Directory to bookmark (defaults to the current directory)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<String>,
    },
    /// Show bookmarks
    List,
    /// Print path to change directory to
    #[command(allow_negative_numbers = true)]
    Go {
        /// Bookmark number (defaults to the most recent)
        #[arg(value_name = "NUM", add = ArgValueCompleter::new(list_bookmark_indices))]
        index: Option<String>,
    },
    /// Remove bookmark by number
    #[command(allow_negative_numbers = true)]
    Remove {
        /// Bookmark number
        #[arg(value_name = "NUM", add = ArgValueCompleter::new(list_bookmark_indices))]
        index: String,
    },
    /// Delete all bookmarks
    Clear,
    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
    /// Generate shell integration script
    ShellInit {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
    // Any other command prints usage
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// List bookmark indices for completion of `go` and `remove`
///
/// Returns empty Vec if the bookmark file cannot be read.
/// Each candidate carries the bookmarked path as help text.
#[must_use]
pub fn list_bookmark_indices(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(path) = MarkStore::default_path() else {
        return Vec::new();
    };
    let Ok(store) = MarkStore::open(path) else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    store
        .list()
        .map(|(index, dir)| (index.to_string(), dir))
        .filter(|(index, _)| index.starts_with(&*prefix))
        .map(|(index, dir)| {
            CompletionCandidate::new(index).help(Some(display_path(Path::new(dir)).into()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_parses_to_none() {
        let cli = Cli::try_parse_from(["mark"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_without_dir() {
        let cli = Cli::try_parse_from(["mark", "add"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { dir: None })));
    }

    #[test]
    fn test_add_accepts_empty_dir() {
        let cli = Cli::try_parse_from(["mark", "add", ""]).unwrap();
        match cli.command {
            Some(Commands::Add { dir }) => assert_eq!(dir.as_deref(), Some("")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_go_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["mark", "go", "0", "extra"]).is_err());
    }

    #[test]
    fn test_go_accepts_negative_index() {
        let cli = Cli::try_parse_from(["mark", "go", "-1"]).unwrap();
        match cli.command {
            Some(Commands::Go { index }) => assert_eq!(index.as_deref(), Some("-1")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_remove_keeps_raw_index() {
        let cli = Cli::try_parse_from(["mark", "remove", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Remove { index }) => assert_eq!(index, "abc"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_remove_requires_index() {
        assert!(Cli::try_parse_from(["mark", "remove"]).is_err());
    }

    #[test]
    fn test_unknown_command_is_captured() {
        let cli = Cli::try_parse_from(["mark", "jump", "3"]).unwrap();
        match cli.command {
            Some(Commands::Unknown(args)) => assert_eq!(args, vec!["jump", "3"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_color_flag_after_command() {
        let cli = Cli::try_parse_from(["mark", "go", "--color", "never"]).unwrap();
        assert_eq!(cli.color, Some(crate::color::ColorMode::Never));
        assert!(matches!(cli.command, Some(Commands::Go { index: None })));
    }
}
