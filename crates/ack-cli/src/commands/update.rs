//! Update command
//!
//! Append the "Addressed in commit" marker to selected comments.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use ack_core::batch::{self, BatchSummary, UpdateEvent, UpdateOutcome};
use ack_core::comment::{CommentReconciler, PendingUpdate};
use ack_core::config::Config;
use ack_core::store::{CommentStore, RevisionProvider};
use ack_core::types::CommentId;
use ack_core::AckError;
use ack_integration::{DryRunCommentStore, FixedRevision, GitHubCommentStore, GitRevisionProvider};
use ack_storage::CommentFile;

/// Arguments for the update command
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Ids of the comments to mark as addressed
    #[arg(required = true, value_parser = parse_comment_id)]
    pub ids: Vec<CommentId>,

    /// What was fixed, appended after the revision
    #[arg(long, short)]
    pub note: String,

    /// Comment export file (defaults to input.path from the configuration)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Revision to record instead of the current git HEAD
    #[arg(long)]
    pub revision: Option<String>,

    /// Repository as OWNER/NAME (overrides github.owner and github.repo)
    #[arg(long)]
    pub repo: Option<String>,

    /// Skip comments that are already marked as addressed
    #[arg(long)]
    pub skip_addressed: bool,

    /// Show the new bodies without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Save updated bodies into the export file after a successful update
    #[arg(long)]
    pub write_back: bool,
}

/// Numeric ids become `Number`, anything else `Text`; blank ids are rejected.
fn parse_comment_id(s: &str) -> std::result::Result<CommentId, AckError> {
    s.parse()
}

/// Execute the update command
pub fn execute(args: UpdateArgs, mut config: Config) -> Result<()> {
    if let Some(slug) = &args.repo {
        config.github.set_repository(slug)?;
    }

    let path = args.input.clone().unwrap_or_else(|| config.input.path.clone());
    let comment_file = CommentFile::new(&path);
    let records = comment_file
        .load()
        .with_context(|| format!("Failed to load comments from {}", path.display()))?;

    let revision = resolve_revision(&args, &config).context("Failed to determine current revision")?;
    info!("Marking comments as addressed in {}", revision);

    let pending = CommentReconciler::new().select_pending_updates(&records, &args.ids, &revision, &args.note);
    for id in &pending.not_found {
        println!("{} Comment {} not found", "⚠".yellow(), id);
    }

    let (updates, skipped) = if args.skip_addressed || config.update.skip_addressed {
        batch::skip_addressed(&records, pending.updates)
    } else {
        (pending.updates, Vec::new())
    };
    for id in &skipped {
        println!("{} Comment {} already addressed, skipping", "•".dimmed(), id);
    }

    let store: Box<dyn CommentStore> = if args.dry_run {
        Box::new(DryRunCommentStore::new())
    } else {
        Box::new(GitHubCommentStore::from_env(&config.github).context("Failed to set up GitHub client")?)
    };

    let outcomes = batch::apply_updates(&store, updates, |event| print_event(event, args.dry_run));

    if !args.dry_run && (args.write_back || config.update.write_back) {
        let applied: Vec<PendingUpdate> = outcomes
            .iter()
            .filter_map(|o| match o {
                UpdateOutcome::Updated(update) => Some(update.clone()),
                UpdateOutcome::Failed { .. } => None,
            })
            .collect();
        let changed = comment_file
            .write_back(&applied)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {} updated comments to {}", changed, path.display());
    }

    let summary = BatchSummary::from_outcomes(&outcomes, pending.not_found.len(), skipped.len());
    println!("Done updating comments!");
    print_summary(&summary);

    Ok(())
}

fn resolve_revision(args: &UpdateArgs, config: &Config) -> ack_core::Result<String> {
    match (&args.revision, &config.git.repo_dir) {
        (Some(revision), _) => FixedRevision::new(revision.as_str()).current_revision(),
        (None, Some(dir)) => GitRevisionProvider::in_dir(dir).current_revision(),
        (None, None) => GitRevisionProvider::new().current_revision(),
    }
}

fn print_event(event: UpdateEvent<'_>, dry_run: bool) {
    match event {
        UpdateEvent::Started(id) => println!("Updating comment {}...", id),
        UpdateEvent::Finished(UpdateOutcome::Updated(update)) if dry_run => {
            println!("{} Would update comment {} to:", "✅".green(), update.id);
            for line in update.new_body.lines() {
                println!("    {}", line.dimmed());
            }
        }
        UpdateEvent::Finished(UpdateOutcome::Updated(update)) => {
            println!("{} Successfully updated comment {}", "✅".green(), update.id);
        }
        UpdateEvent::Finished(UpdateOutcome::Failed { id, error }) => {
            println!("{} Failed to update comment {}: {}", "❌".red(), id, error);
        }
    }
}

fn print_summary(summary: &BatchSummary) {
    println!(
        "{}: {} updated, {} failed, {} not found, {} skipped",
        "Summary".bold(),
        summary.updated.to_string().green(),
        summary.failed.to_string().red(),
        summary.not_found.to_string().yellow(),
        summary.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: UpdateArgs,
    }

    #[test]
    fn test_parse_ids() {
        let cli = TestCli::parse_from(["test", "2203532565", "abc", "--note", "fixed"]);
        assert_eq!(
            cli.args.ids,
            vec![CommentId::Number(2203532565), CommentId::from("abc")]
        );
        assert_eq!(cli.args.note, "fixed");
        assert!(!cli.args.dry_run);
    }

    #[test]
    fn test_parse_ids_rejects_blank() {
        assert!(TestCli::try_parse_from(["test", "", "--note", "fixed"]).is_err());
        assert!(TestCli::try_parse_from(["test", "1", "  ", "--note", "fixed"]).is_err());
    }

    #[test]
    fn test_ids_required() {
        assert!(TestCli::try_parse_from(["test", "--note", "fixed"]).is_err());
    }

    #[test]
    fn test_note_required() {
        assert!(TestCli::try_parse_from(["test", "1"]).is_err());
    }

    #[test]
    fn test_revision_override() {
        let cli = TestCli::parse_from(["test", "1", "-n", "x", "--revision", "cafebabe"]);
        let revision = resolve_revision(&cli.args, &Config::default()).unwrap();
        assert_eq!(revision, "cafebabe");
    }
}
