// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

//! # Patron Directory CLI
//!
//! The `patron` binary runs the client directory service and talks to a
//! running instance from the command line.
//!
//! ## Commands
//!
//! - `patron serve` - Run the directory HTTP service in the foreground
//! - `patron clients list|search|create|update` - Manage client records
//! - `patron config show|validate` - Configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;

use commands::{ClientsCommand, ConfigCommand};

/// Patron client directory - service runner and API client
#[derive(Parser)]
#[command(name = "patron")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "PATRON_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Host of a running directory service (client commands)
    #[arg(long, global = true, env = "PATRON_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port of a running directory service (client commands)
    #[arg(long, global = true, env = "PATRON_PORT", default_value = "8000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PATRON_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the directory HTTP service in the foreground
    #[command(name = "serve")]
    Serve,

    /// Manage client records through a running service
    #[command(name = "clients")]
    Clients {
        #[command(subcommand)]
        command: ClientsCommand,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Serve) => commands::serve::run(cli.config).await,
        Some(Commands::Clients { command }) => {
            commands::clients::handle_command(command, &cli.host, cli.port).await
        }
        Some(Commands::Config { command }) => {
            commands::config::handle_command(command, cli.config).await
        }
        None => {
            // No command provided - show help
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
