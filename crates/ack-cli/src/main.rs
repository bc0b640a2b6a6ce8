//! review-ack - mark pull request review comments as addressed
//!
//! Reads a cached JSON export of review comments, reports which ones are
//! already addressed, and appends an "Addressed in commit" marker to
//! selected comments through the GitHub API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Summarise the export in ./pr_comments.json
//! review-ack report
//!
//! # Preview the update for two comments
//! review-ack update 2203532565 2203532568 --note "Use local variables" --dry-run
//!
//! # Send it
//! GITHUB_PAT=... review-ack update 2203532565 2203532568 \
//!     --note "Use local variables" --repo appliedmedia/gmail-2-trello
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
