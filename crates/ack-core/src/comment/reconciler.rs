//! Comment status reconciliation
//!
//! Classifies comment bodies as addressed or pending, and builds the
//! replacement bodies that mark a comment as addressed in a revision.

use super::index::CommentIndex;
use super::model::{ClassifiedComment, CommentRecord};
use crate::types::CommentId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Literal marker written into addressed comments
pub const STATUS_MARKER: &str = "✅ Addressed in commit";

/// Emphasis delimiter wrapping an issue title line
pub const EMPHASIS: &str = "**";

/// Hash directly after the marker's trailing "commit"
static COMMIT_HASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ ([0-9a-f]+)").expect("commit hash pattern is valid"));

/// A replacement body ready to be sent for one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub id: CommentId,
    pub new_body: String,
}

/// Result of selecting updates for a list of target ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingUpdates {
    /// Updates in target-id order
    pub updates: Vec<PendingUpdate>,
    /// Requested ids with no matching record
    pub not_found: Vec<CommentId>,
}

/// Stateless reconciler; all operations are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentReconciler;

impl CommentReconciler {
    /// Create a reconciler
    pub fn new() -> Self {
        Self
    }

    /// Derive the structured view of a record.
    pub fn classify(&self, record: &CommentRecord) -> ClassifiedComment {
        let addressed = is_addressed(&record.body);
        let resolved_commit_hash = if addressed {
            resolved_commit_hash(&record.body)
        } else {
            None
        };

        ClassifiedComment {
            id: record.id.clone(),
            original_line: record.original_line,
            issue_summary: issue_summary(&record.body),
            addressed,
            resolved_commit_hash,
            path: record.extensions.path().map(str::to_string),
            author: record.extensions.author().map(str::to_string),
        }
    }

    /// Append the status marker to a body.
    ///
    /// Existing markers are not detected: applying this twice yields two
    /// markers. Callers that care check [`classify`](Self::classify) first.
    pub fn build_updated_body(&self, original_body: &str, revision_id: &str, note: &str) -> String {
        format!(
            "{}\n\n{} {} - {}",
            original_body, STATUS_MARKER, revision_id, note
        )
    }

    /// Build replacement bodies for the requested ids.
    ///
    /// Ids are processed in the order given, duplicates once. Unknown ids are
    /// reported in `not_found` and do not stop the others.
    pub fn select_pending_updates(
        &self,
        records: &[CommentRecord],
        target_ids: &[CommentId],
        revision_id: &str,
        note: &str,
    ) -> PendingUpdates {
        let index = CommentIndex::new(records);
        let mut seen = HashSet::new();
        let mut result = PendingUpdates::default();

        for id in target_ids {
            if !seen.insert(id.key()) {
                continue;
            }

            match index.get(id) {
                Some(record) => {
                    debug!("Prepared update for comment {}", id);
                    result.updates.push(PendingUpdate {
                        id: record.id.clone(),
                        new_body: self.build_updated_body(&record.body, revision_id, note),
                    });
                }
                None => {
                    warn!("Comment {} not found", id);
                    result.not_found.push(id.clone());
                }
            }
        }

        result
    }
}

/// Whether a body carries the status marker
pub fn is_addressed(body: &str) -> bool {
    body.contains(STATUS_MARKER)
}

/// First line wrapped in `**` on both ends, with the asterisks stripped.
///
/// A rule line such as `***` still counts and yields an empty summary.
pub fn issue_summary(body: &str) -> String {
    body.split('\n')
        .map(str::trim)
        .find(|line| line.starts_with(EMPHASIS) && line.ends_with(EMPHASIS))
        .map(|line| line.trim_matches('*').to_string())
        .unwrap_or_default()
}

/// Lowercase hex hash immediately following the first status marker
pub fn resolved_commit_hash(body: &str) -> Option<String> {
    let start = body.find(STATUS_MARKER)? + STATUS_MARKER.len();
    COMMIT_HASH
        .captures(&body[start..])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(body: &str) -> ClassifiedComment {
        CommentReconciler::new().classify(&CommentRecord::new(1, body))
    }

    #[test]
    fn test_summary_from_bold_line() {
        let c = classify("**Title**");
        assert_eq!(c.issue_summary, "Title");

        let c = classify("_⚠️ Potential issue_\n\n**Avoid reassigning function parameters**\n\nDetails here.");
        assert_eq!(c.issue_summary, "Avoid reassigning function parameters");
    }

    #[test]
    fn test_summary_first_match_wins() {
        let c = classify("**First**\n**Second**");
        assert_eq!(c.issue_summary, "First");
    }

    #[test]
    fn test_summary_trims_surrounding_whitespace() {
        let c = classify("intro\r\n   **Indented title**  \r\nmore");
        assert_eq!(c.issue_summary, "Indented title");
    }

    #[test]
    fn test_summary_absent() {
        assert_eq!(classify("no emphasis here").issue_summary, "");
        assert_eq!(classify("**only opens\ncloses**").issue_summary, "");
        assert_eq!(classify("inline **bold** text").issue_summary, "");
        assert_eq!(classify("***").issue_summary, "");
        assert_eq!(classify("").issue_summary, "");
    }

    #[test]
    fn test_summary_stops_at_rule_line() {
        assert_eq!(classify("***\n**Title**").issue_summary, "");
        assert_eq!(classify("**\n**Title**").issue_summary, "");
        assert_eq!(classify("intro\n****\n**Title**").issue_summary, "");
    }

    #[test]
    fn test_addressed_detection() {
        assert!(classify("done\n\n✅ Addressed in commit abc - x").addressed);
        assert!(classify("✅ Addressed in commit ").addressed);
        assert!(!classify("Addressed in commit abc").addressed);
        assert!(!classify("✅ addressed in commit abc").addressed);
        assert!(!classify("pending").addressed);
    }

    #[test]
    fn test_commit_hash_extraction() {
        let c = classify("✅ Addressed in commit abc123 - fixed it");
        assert_eq!(c.resolved_commit_hash.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_commit_hash_missing() {
        let c = classify("✅ Addressed in commit ");
        assert!(c.addressed);
        assert_eq!(c.resolved_commit_hash, None);

        let c = classify("✅ Addressed in commit - see commit 1234 later");
        assert_eq!(c.resolved_commit_hash, None);
    }

    #[test]
    fn test_commit_hash_first_run_wins() {
        let c = classify("✅ Addressed in commit deadbeefzz - see commit 1234 later");
        assert_eq!(c.resolved_commit_hash.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_commit_hash_ignores_uppercase() {
        let c = classify("✅ Addressed in commit DEADBEEF - fixed");
        assert_eq!(c.resolved_commit_hash, None);
    }

    #[test]
    fn test_commit_hash_uses_text_after_marker() {
        let c = classify("See commit 1111111 for context.\n\n✅ Addressed in commit 2222222 - done");
        assert_eq!(c.resolved_commit_hash.as_deref(), Some("2222222"));
    }

    #[test]
    fn test_commit_hash_not_extracted_when_pending() {
        let c = classify("Introduced by commit deadbeef");
        assert!(!c.addressed);
        assert_eq!(c.resolved_commit_hash, None);
    }

    #[test]
    fn test_classify_carries_path_and_author() {
        let record: CommentRecord = serde_json::from_str(
            r#"{"id": 3, "body": "b", "path": "src/lib.rs", "user": {"login": "octocat"}}"#,
        )
        .unwrap();
        let c = CommentReconciler::new().classify(&record);
        assert_eq!(c.path.as_deref(), Some("src/lib.rs"));
        assert_eq!(c.author.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_build_updated_body() {
        let body = CommentReconciler::new().build_updated_body("original text", "deadbeef", "fixed X");
        assert_eq!(body, "original text\n\n✅ Addressed in commit deadbeef - fixed X");
    }

    #[test]
    fn test_build_updated_body_twice_appends_twice() {
        let reconciler = CommentReconciler::new();
        let once = reconciler.build_updated_body("original text", "deadbeef", "fixed X");
        let twice = reconciler.build_updated_body(&once, "deadbeef", "fixed X");

        assert_eq!(twice.matches(STATUS_MARKER).count(), 2);
        assert!(twice.starts_with(&once));
    }

    #[test]
    fn test_updated_body_classifies_as_addressed() {
        let reconciler = CommentReconciler::new();
        let body = reconciler.build_updated_body("**Bug**\nbroken", "0a1b2c3d", "fixed");
        let c = reconciler.classify(&CommentRecord::new(9, body));
        assert!(c.addressed);
        assert_eq!(c.issue_summary, "Bug");
        assert_eq!(c.resolved_commit_hash.as_deref(), Some("0a1b2c3d"));
    }

    #[test]
    fn test_select_pending_updates_reports_missing() {
        let records = vec![
            CommentRecord::new(1, "one"),
            CommentRecord::new(2, "two"),
            CommentRecord::new(3, "three"),
        ];
        let targets = vec![CommentId::Number(1), CommentId::Number(4), CommentId::Number(3)];

        let pending = CommentReconciler::new().select_pending_updates(&records, &targets, "abc", "fixed");

        assert_eq!(pending.updates.len(), 2);
        assert_eq!(pending.not_found, vec![CommentId::Number(4)]);
        assert_eq!(pending.updates[0].id, CommentId::Number(1));
        assert_eq!(pending.updates[0].new_body, "one\n\n✅ Addressed in commit abc - fixed");
        assert_eq!(pending.updates[1].id, CommentId::Number(3));
    }

    #[test]
    fn test_select_pending_updates_does_not_skip_addressed() {
        let records = vec![CommentRecord::new(1, "x\n\n✅ Addressed in commit aaa - old")];
        let pending = CommentReconciler::new().select_pending_updates(
            &records,
            &[CommentId::Number(1)],
            "bbb",
            "again",
        );
        assert_eq!(pending.updates.len(), 1);
        assert_eq!(pending.updates[0].new_body.matches(STATUS_MARKER).count(), 2);
    }

    #[test]
    fn test_select_pending_updates_collapses_duplicate_targets() {
        let records = vec![CommentRecord::new(1, "one")];
        let targets = vec![CommentId::Number(1), CommentId::from("1"), CommentId::Number(5), CommentId::Number(5)];
        let pending = CommentReconciler::new().select_pending_updates(&records, &targets, "abc", "n");
        assert_eq!(pending.updates.len(), 1);
        assert_eq!(pending.not_found.len(), 1);
    }

    #[test]
    fn test_select_pending_updates_keeps_record_id_form() {
        let records = vec![CommentRecord::new("77", "text id")];
        let pending = CommentReconciler::new().select_pending_updates(
            &records,
            &[CommentId::Number(77)],
            "abc",
            "n",
        );
        assert_eq!(pending.updates[0].id, CommentId::from("77"));
    }
}
