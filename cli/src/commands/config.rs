// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use patron_core::domain::config::ServiceConfig;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => show(config_override, paths).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {
    let config = ServiceConfig::load_or_default(config_override.clone())
        .context("Failed to load configuration")?;

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        if let Some(path) = &config_override {
            println!("  1. --config flag: {}", path.display());
        } else {
            println!("  1. --config flag: {}", "(not set)".dimmed());
        }
        println!(
            "  2. PATRON_CONFIG_PATH: {}",
            std::env::var("PATRON_CONFIG_PATH")
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./patron-config.yaml");
        println!("  4. ~/.patron/config.yaml");
        println!();
    }

    println!("{}", "Current configuration:".bold());
    println!();

    println!("{}", "Server:".bold());
    println!("  Bind: {}:{}", config.server.host, config.server.port);
    println!("  Allowed origin: {}", config.server.allowed_origin);
    println!();

    println!("{}", "Storage:".bold());
    println!("  Backend: {}", config.storage.backend);
    if config.storage.backend == "postgres" {
        let configured = config.storage.connection_string.is_some();
        println!(
            "  Connection string: {}",
            if configured { "(configured)" } else { "(missing)" }
        );
    }
    println!();

    println!("{}", "Chaos:".bold());
    println!("  Failure rate: {}", config.chaos.failure_rate);
    println!("  Delay: {}ms", config.chaos.delay_ms);
    println!();

    println!("{}", "Seeding:".bold());
    println!("  Enabled: {}", config.seeding.enabled);
    println!();

    println!("{}", "Observability:".bold());
    println!("  Metrics enabled: {}", config.observability.metrics_enabled);
    if config.observability.metrics_enabled {
        println!("  Metrics port: {}", config.observability.metrics_port);
    }

    Ok(())
}

async fn validate(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config =
        ServiceConfig::load_or_default(config_path).context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    println!("{}", "✓ Configuration is valid".green());

    Ok(())
}
