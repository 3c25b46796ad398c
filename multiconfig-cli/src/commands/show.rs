//! Show command implementation.
//!
//! Resolves the effective configuration and prints the file's contents.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use clap::Args;
use multiconfig::LogSink;
use std::fs;

/// Print the contents of the effective configuration file
#[derive(Args)]
pub struct ShowCommand {}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions, logger: &dyn LogSink) -> Result<(), CliError> {
        let resolution = resolve_configuration(global, logger)?;

        if !resolution.path.exists() {
            return Err(CliError::SemanticFailure(format!(
                "Configuration file not found: {}",
                resolution.path.display()
            )));
        }

        let contents = fs::read_to_string(&resolution.path)?;
        print!("{contents}");
        if !contents.is_empty() && !contents.ends_with('\n') {
            println!();
        }

        Ok(())
    }
}
