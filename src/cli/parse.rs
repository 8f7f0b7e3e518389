//! CLI parse: clap types for vaultnav. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Vaultnav CLI - Navigation manifest generation for content vaults
#[derive(Parser)]
#[command(name = "vaultnav")]
#[command(about = "Generate the SPA navigation manifest for a pre-rendered content vault")]
pub struct Cli {
    /// Path to the ready-to-serve vault directory
    pub path: PathBuf,

    /// Write the manifest to a file instead of standard output
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file path (overrides vault-local config discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
