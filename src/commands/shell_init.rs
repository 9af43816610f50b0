//! Shell init command - Generate shell integration scripts

use anyhow::Result;

/// Shell integration script for `shell`
///
/// The script defines a `mark` function that changes into the directory
/// printed by `mark go` and forwards every other command to the binary.
///
/// # Errors
/// Returns an error if an unsupported shell is specified
pub fn shell_script(shell: &str) -> Result<&'static str> {
    let script = match shell {
        "bash" => include_str!("../../templates/bash.sh"),
        "zsh" => include_str!("../../templates/zsh.sh"),
        "fish" => include_str!("../../templates/fish.fish"),
        _ => {
            anyhow::bail!("Invalid shell: {shell}. Supported shells: bash, zsh, fish");
        }
    };
    Ok(script)
}

/// Generate shell integration script
///
/// # Errors
/// Returns an error if an unsupported shell is specified
pub fn cmd_shell_init(shell: &str) -> Result<()> {
    print!("{}", shell_script(shell)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_wrap_go() {
        for shell in ["bash", "zsh", "fish"] {
            let script = shell_script(shell).unwrap();
            assert!(script.contains("command mark go"), "{shell} script");
            assert!(script.contains("cd "), "{shell} script");
        }
    }

    #[test]
    fn test_unknown_shell() {
        let err = shell_script("tcsh").unwrap_err();
        assert!(err.to_string().contains("Invalid shell: tcsh"));
    }
}
