//! Configuration management for review-ack

use crate::error::{AckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment export settings
    pub input: InputConfig,
    /// GitHub API settings
    pub github: GitHubConfig,
    /// Git settings
    pub git: GitConfig,
    /// Update behaviour
    pub update: UpdateConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AckError::Config(format!("{} does not exist", path.display()))
            } else {
                AckError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load the first existing file among `candidates`, else defaults
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self> {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::load(path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Comment export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the cached JSON export
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pr_comments.json"),
        }
    }
}

/// GitHub REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API root
    pub api_base: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Environment variable holding the access token
    pub token_env: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: String::new(),
            repo: String::new(),
            token_env: "GITHUB_PAT".to_string(),
            user_agent: "review-ack".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GitHubConfig {
    /// Set owner and repo from an `owner/name` slug
    pub fn set_repository(&mut self, slug: &str) -> Result<()> {
        match slug.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                self.owner = owner.to_string();
                self.repo = repo.to_string();
                Ok(())
            }
            _ => Err(AckError::Config(format!(
                "Invalid repository '{}', expected OWNER/NAME",
                slug
            ))),
        }
    }

    /// Check that owner and repo are set
    pub fn validate(&self) -> Result<()> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return Err(AckError::Config(
                "github.owner and github.repo must be set (or pass --repo OWNER/NAME)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Git configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Repository to read HEAD from (current directory if unset)
    pub repo_dir: Option<PathBuf>,
}

/// Update command defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Skip comments that already carry the status marker
    pub skip_addressed: bool,
    /// Write updated bodies back into the export file
    pub write_back: bool,
}
