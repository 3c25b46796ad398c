//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the path of the effective configuration file
//! - `show`: Print the contents of the effective configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod show;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show::ShowCommand;
