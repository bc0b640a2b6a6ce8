//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod report;
pub mod update;

use ack_core::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Project-local configuration file
pub const PROJECT_CONFIG_PATH: &str = ".review-ack/config.toml";

/// review-ack - Mark pull request review comments as addressed
#[derive(Debug, Parser)]
#[command(name = "review-ack")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarise the status of every comment in the export
    Report(report::ReportArgs),

    /// Mark comments as addressed in the current revision
    Update(update::UpdateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Report(args) => report::execute(args, &load_config(config_path)?),
        Commands::Update(args) => update::execute(args, load_config(config_path)?),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration files tried when `--config` is not given
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_PATH)];
    if let Some(dirs) = directories::ProjectDirs::from("com", "review-ack", "review-ack") {
        candidates.push(dirs.config_dir().join("config.toml"));
    }
    candidates
}

/// Load `explicit` if given, otherwise the first existing candidate
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::load_first(&config_candidates()).context("Failed to load configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_config_candidates_start_with_project() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(PROJECT_CONFIG_PATH));
    }

    #[test]
    fn test_load_explicit_missing_config_fails() {
        assert!(load_config(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
