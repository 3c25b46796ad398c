//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, ShowCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving a site's effective configuration file.
#[derive(Parser)]
#[command(name = "multiconfig")]
#[command(version, about = "Resolve and merge site configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Site base directory (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true, env = "MULTICONFIG_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Comma-separated list of configuration files, merged in order
    #[arg(long, value_name = "PATHS", global = true, env = "MULTICONFIG_CONFIG")]
    pub config: Option<String>,

    /// Directory the combined configuration is written to (defaults to the base directory)
    #[arg(long, value_name = "PATH", global = true, env = "MULTICONFIG_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the path of the effective configuration file
    Resolve(ResolveCommand),

    /// Print the contents of the effective configuration file
    Show(ShowCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
