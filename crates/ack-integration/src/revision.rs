//! Revision providers

use ack_core::error::{AckError, Result};
use ack_core::store::RevisionProvider;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Reads `HEAD` with `git rev-parse`
#[derive(Debug, Clone, Default)]
pub struct GitRevisionProvider {
    repo_dir: Option<PathBuf>,
}

impl GitRevisionProvider {
    /// Use the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific repository directory
    pub fn in_dir(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(repo_dir.into()),
        }
    }
}

impl RevisionProvider for GitRevisionProvider {
    fn current_revision(&self) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(["rev-parse", "HEAD"]);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| AckError::Command {
            command: "git rev-parse HEAD".to_string(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AckError::Git(stderr.trim().to_string()));
        }

        let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if revision.is_empty() {
            return Err(AckError::Git("git rev-parse returned no revision".to_string()));
        }

        debug!("Current revision: {}", revision);
        Ok(revision)
    }
}

/// Revision supplied by the caller
#[derive(Debug, Clone)]
pub struct FixedRevision(String);

impl FixedRevision {
    pub fn new(revision: impl Into<String>) -> Self {
        Self(revision.into())
    }
}

impl RevisionProvider for FixedRevision {
    fn current_revision(&self) -> Result<String> {
        let revision = self.0.trim();
        if revision.is_empty() {
            return Err(AckError::Git("empty revision".to_string()));
        }
        Ok(revision.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_revision() {
        let provider = FixedRevision::new(" deadbeef\n");
        assert_eq!(provider.current_revision().unwrap(), "deadbeef");
    }

    #[test]
    fn test_fixed_revision_empty() {
        assert!(FixedRevision::new("  ").current_revision().is_err());
    }

    #[test]
    fn test_git_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let provider = GitRevisionProvider::in_dir(dir.path());
        // Fails whether git is missing or the directory is not a repository
        assert!(provider.current_revision().is_err());
    }
}
