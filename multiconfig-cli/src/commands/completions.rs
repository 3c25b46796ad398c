//! Shell completion generation command.
//!
//! This module provides the `completions` command which writes a completion
//! script to stdout and prints installation hints to stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "multiconfig";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
            eprintln!();
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Instructions for enabling completions in `shell`.
fn install_hint(shell: Shell) -> Vec<String> {
    match shell {
        Shell::Bash => vec![
            format!("Install with: {BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"),
            format!("Or add to ~/.bashrc: eval \"$({BIN_NAME} completions bash)\""),
        ],
        Shell::Zsh => vec![
            format!("Install with: {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"),
            "Make sure ~/.zsh/completions is in your $fpath".to_string(),
        ],
        Shell::Fish => vec![format!(
            "Install with: {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
        )],
        Shell::PowerShell => vec![format!(
            "Run: {BIN_NAME} completions powershell | Out-String | Invoke-Expression"
        )],
        _ => Vec::new(),
    }
}
