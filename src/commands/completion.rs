//! Completion command - Print the dynamic completion hook for a shell

use anyhow::Result;
use clap_complete::Shell;

/// Line to add to the shell's startup file, with a comment naming that file
///
/// # Errors
/// Returns an error for any shell other than bash, zsh or fish
pub fn completion_setup(shell: &str) -> Result<&'static str> {
    let unsupported = || anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish");

    let setup = match shell.parse::<Shell>().map_err(|_| unsupported())? {
        Shell::Bash => "# Add this to your ~/.bashrc:\nsource <(COMPLETE=bash mark)\n",
        Shell::Zsh => "# Add this to your ~/.zshrc:\nsource <(COMPLETE=zsh mark)\n",
        Shell::Fish => {
            "# Add this to your ~/.config/fish/config.fish:\nsource (COMPLETE=fish mark | psub)\n"
        }
        _ => return Err(unsupported()),
    };
    Ok(setup)
}

/// Print completion setup for `shell`
///
/// # Errors
/// Returns an error for any shell other than bash, zsh or fish
pub fn cmd_completion(shell: &str) -> Result<()> {
    print!("{}", completion_setup(shell)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_sources_complete_hook() {
        for shell in ["bash", "zsh", "fish"] {
            let setup = completion_setup(shell).unwrap();
            assert!(setup.contains(&format!("COMPLETE={shell} mark")), "{setup}");
        }
    }

    #[test]
    fn test_other_clap_shells_rejected_like_unknown_ones() {
        for shell in ["powershell", "elvish", "tcsh"] {
            let err = completion_setup(shell).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
            );
        }
    }
}
