//! Config command
//!
//! Manage review-ack configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{config_candidates, load_config, PROJECT_CONFIG_PATH};
use ack_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file in use
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(explicit, json),
        ConfigCommand::Init { force } => init_config(explicit, force),
        ConfigCommand::Path => show_path(explicit),
    }
}

fn active_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_candidates().into_iter().find(|p| p.exists()),
    }
}

fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
    let config = load_config(explicit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        match active_config_path(explicit) {
            Some(path) => println!("{}", path.display().to_string().dimmed()),
            None => println!("{}", "(defaults, no configuration file found)".dimmed()),
        }
        println!();
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_PATH));

    if path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "⚠".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&path, Config::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Created {}", "✓".green(), path.display());

    Ok(())
}

fn show_path(explicit: Option<&Path>) -> Result<()> {
    match active_config_path(explicit) {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", "No configuration file found; using defaults".dimmed()),
    }
    Ok(())
}
