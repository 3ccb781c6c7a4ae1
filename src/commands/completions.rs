//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{DroidifyError, Result};

/// Generate shell completions to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    generate(&args.shell, &mut std::io::stdout().lock())
}

/// Generate completions for `shell` into `out`
pub fn generate(shell: &str, out: &mut impl Write) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "droidify", out);
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(DroidifyError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}
