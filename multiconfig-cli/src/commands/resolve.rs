//! Resolve command implementation.
//!
//! Prints where the site's effective configuration lives, merging several
//! configuration files into `_multiconfig.yml` first when needed.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use multiconfig::{LogSink, Resolution};

/// Output format for the resolve command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    /// Just the path
    #[default]
    Text,
    /// Path, resolution kind and source count as JSON
    Json,
}

/// Print the path of the effective configuration file
#[derive(Args)]
pub struct ResolveCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ResolveFormat::Text)]
    pub format: ResolveFormat,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions, logger: &dyn LogSink) -> Result<(), CliError> {
        let resolution = resolve_configuration(global, logger)?;
        println!("{}", render(&resolution, self.format)?);
        Ok(())
    }
}

fn render(resolution: &Resolution, format: ResolveFormat) -> Result<String, CliError> {
    match format {
        ResolveFormat::Text => Ok(resolution.path.display().to_string()),
        ResolveFormat::Json => Ok(serde_json::to_string_pretty(resolution)?),
    }
}
