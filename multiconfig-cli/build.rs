//! Build script for multiconfig-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("multiconfig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and merge site configuration files")
        .long_about(
            "Decide which configuration file a site should load, merging several YAML or \
             JSON files into _multiconfig.yml when a comma-separated list is given",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Site base directory (defaults to the current directory)")
                .value_name("PATH")
                .global(true)
                .env("MULTICONFIG_BASE_DIR"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Comma-separated list of configuration files, merged in order")
                .value_name("PATHS")
                .global(true)
                .env("MULTICONFIG_CONFIG"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory the combined configuration is written to")
                .value_name("PATH")
                .global(true)
                .env("MULTICONFIG_OUTPUT_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the path of the effective configuration file")
                .long_about("Resolve the configuration and print the path, or a JSON summary"),
            Command::new("show")
                .about("Print the contents of the effective configuration file")
                .long_about("Resolve the configuration and print the selected file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("multiconfig.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
