//! noel-luxe - ornament layouts and generated greetings for the holiday tree
//!
//! Command-line driver: dumps scene data for the renderer and fetches greetings.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::AppConfig;
use noel_luxe_greeting::DEFAULT_THEME;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Holiday tree layouts and greetings", long_about = None)]
struct Cli {
    /// Configuration file (defaults to config/scene.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the scene layout and print it as JSON
    Layout {
        /// Fixed seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Request a generated greeting
    Greet {
        /// Recipient name (blank uses a generic salutation)
        #[arg(long, default_value = "")]
        name: String,

        /// Greeting theme
        #[arg(long, default_value = DEFAULT_THEME)]
        theme: String,
    },
    /// Write the effective configuration as TOML
    WriteConfig {
        /// Destination path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting noel-luxe v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };

    match cli.command {
        Command::Layout {
            seed,
            output,
            compact,
        } => commands::run_layout(&config, seed, output.as_deref(), compact),
        Command::Greet { name, theme } => commands::run_greet(&config, &name, &theme),
        Command::WriteConfig { path } => commands::write_config(&config, &path),
    }
}
