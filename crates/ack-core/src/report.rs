//! Status report rendering

use crate::comment::{ClassifiedComment, CommentRecord, CommentReconciler};
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// One report row: 1-based position in the export plus the classification
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    #[serde(flatten)]
    pub comment: ClassifiedComment,
}

/// Classified view of a whole export
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total: usize,
    pub addressed: usize,
    pub pending: usize,
    pub comments: Vec<ReportEntry>,
}

impl Report {
    /// Classify every record, keeping export order
    pub fn build(records: &[CommentRecord]) -> Self {
        let reconciler = CommentReconciler::new();
        let comments: Vec<ReportEntry> = records
            .iter()
            .enumerate()
            .map(|(i, record)| ReportEntry {
                index: i + 1,
                comment: reconciler.classify(record),
            })
            .collect();
        let addressed = comments.iter().filter(|e| e.comment.addressed).count();

        Self {
            total: comments.len(),
            addressed,
            pending: comments.len() - addressed,
            comments,
        }
    }

    /// Keep only pending comments. Totals still describe the whole export.
    pub fn pending_only(mut self) -> Self {
        self.comments.retain(|e| !e.comment.addressed);
        self
    }

    /// Plain-text report, one block per comment
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Found {} comments\n", self.total);

        for entry in &self.comments {
            let c = &entry.comment;
            let _ = writeln!(out, "{:2}. ID: {}, Line: {}", entry.index, c.id, c.line_display());
            let _ = writeln!(out, "    Issue: {}", c.issue_summary);
            let _ = writeln!(out, "    Status: {} {}", c.status().emoji(), c.status());
            if let Some(hash) = &c.resolved_commit_hash {
                let _ = writeln!(out, "    Commit: {}", hash);
            }
            out.push('\n');
        }

        out
    }

    /// Pretty JSON report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
