//! Comment data models

use crate::types::{CommentId, Extensions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One review comment from the JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Comment identifier, unique within an export
    pub id: CommentId,
    /// Comment text (markdown)
    pub body: String,
    /// Source line the comment refers to, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_line: Option<u64>,
    /// Remaining export fields, preserved as-is
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl CommentRecord {
    /// Create a record with no line reference
    pub fn new(id: impl Into<CommentId>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            original_line: None,
            extensions: Extensions::new(),
        }
    }

    /// Set the original line
    pub fn with_line(mut self, line: u64) -> Self {
        self.original_line = Some(line);
        self
    }
}

/// Resolution status derived from a comment body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Body carries the status marker
    Addressed,
    /// No status marker yet
    Pending,
}

impl CommentStatus {
    /// Get display emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            CommentStatus::Addressed => "✅",
            CommentStatus::Pending => "❌",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStatus::Addressed => write!(f, "ADDRESSED"),
            CommentStatus::Pending => write!(f, "PENDING"),
        }
    }
}

/// Structured view of a comment, derived on every run and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedComment {
    pub id: CommentId,
    pub original_line: Option<u64>,
    /// First `**bold**` line of the body, or empty
    pub issue_summary: String,
    /// Whether the body contains the status marker
    pub addressed: bool,
    /// Hash following the status marker, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ClassifiedComment {
    /// Line reference for display ("N/A" when absent)
    pub fn line_display(&self) -> String {
        self.original_line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn status(&self) -> CommentStatus {
        if self.addressed {
            CommentStatus::Addressed
        } else {
            CommentStatus::Pending
        }
    }
}
