//! Report command
//!
//! Print the addressed/pending status of every comment in the export.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use ack_core::config::Config;
use ack_core::report::Report;
use ack_storage::CommentFile;

/// Report format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// One text block per comment
    Text,
    /// JSON document
    Json,
}

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Comment export file (defaults to input.path from the configuration)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Only list pending comments
    #[arg(long)]
    pub pending: bool,
}

/// Execute the report command
pub fn execute(args: ReportArgs, config: &Config) -> Result<()> {
    let path = args.input.unwrap_or_else(|| config.input.path.clone());
    let records = CommentFile::new(&path)
        .load()
        .with_context(|| format!("Failed to load comments from {}", path.display()))?;

    let mut report = Report::build(&records);
    if args.pending {
        report = report.pending_only();
    }

    let output = match args.format {
        ReportFormat::Text => report.to_text(),
        ReportFormat::Json => report.to_json()? + "\n",
    };

    std::io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}
