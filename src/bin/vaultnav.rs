//! Vaultnav CLI Binary
//!
//! Command-line interface for generating the vault navigation manifest.

use clap::Parser;
use std::process;
use tracing::{error, info};
use vaultnav::cli::{map_error, Cli, RunContext};
use vaultnav::config::ConfigLoader;
use vaultnav::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Vaultnav CLI starting");

    // Failure messages go to stdout as plain text; no JSON envelope is
    // emitted on any failure path, and every failure exits with status 1.
    let context = match RunContext::new(cli.path.clone(), cli.config.clone()) {
        Ok(ctx) => {
            info!(vault = %ctx.vault_root().display(), "Run context initialized");
            ctx
        }
        Err(e) => {
            error!("Error resolving vault root: {}", e);
            println!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(cli.output.as_deref()) {
        Ok(output) => {
            info!("Manifest generation completed");
            println!("{}", output);
        }
        Err(e) => {
            error!("Manifest generation failed: {}", e);
            println!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    // Try to load config file first
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
