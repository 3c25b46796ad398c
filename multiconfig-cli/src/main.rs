//! Main entry point for the multiconfig CLI.
//!
//! This is the command-line interface for resolving a site's configuration.
//! It provides commands for:
//! - `resolve`: Print the effective configuration path
//! - `show`: Print the effective configuration contents
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = multiconfig::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        base_dir: cli.base_dir,
        config: cli.config,
        output_dir: cli.output_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global, &logger),
        cli::Command::Show(cmd) => cmd.execute(&global, &logger),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
