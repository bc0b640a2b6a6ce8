//! Core type definitions for review-ack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a review comment as it appears in the export.
///
/// GitHub hands out numeric ids, but other exports use strings, so both
/// forms are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentId {
    /// Numeric id (GitHub REST)
    Number(u64),
    /// Any other opaque id
    Text(String),
}

impl CommentId {
    /// Key used for lookups, so `123` and `"123"` refer to the same comment
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentId::Number(n) => write!(f, "{}", n),
            CommentId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for CommentId {
    type Err = crate::AckError;

    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(crate::AckError::InvalidId("empty id".to_string()));
        }
        Ok(s.parse::<u64>()
            .map(CommentId::Number)
            .unwrap_or_else(|_| CommentId::Text(s.to_string())))
    }
}

impl From<u64> for CommentId {
    fn from(n: u64) -> Self {
        CommentId::Number(n)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId::Text(s.to_string())
    }
}

/// Fields of an exported comment that review-ack does not interpret.
/// Kept in file order so that writing the export back does not lose data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extensions {
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Extensions {
    /// Create empty extensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if extensions is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// File path the comment is attached to (GitHub `path`)
    pub fn path(&self) -> Option<&str> {
        self.get("path")?.as_str()
    }

    /// Login of the comment author (GitHub `user.login`)
    pub fn author(&self) -> Option<&str> {
        self.get("user")?.get("login")?.as_str()
    }
}
