//! GitHub REST comment store

use ack_core::config::GitHubConfig;
use ack_core::error::{AckError, Result};
use ack_core::store::CommentStore;
use ack_core::types::CommentId;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Serialize)]
struct UpdateCommentRequest<'a> {
    body: &'a str,
}

/// Updates pull request review comments through the GitHub REST API
#[derive(Clone)]
pub struct GitHubCommentStore {
    http: Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubCommentStore {
    /// Create a store with an explicit token
    pub fn new(config: &GitHubConfig, token: impl Into<String>) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AckError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: token.into(),
        })
    }

    /// Create a store reading the token from `config.token_env`
    pub fn from_env(config: &GitHubConfig) -> Result<Self> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AckError::MissingToken(config.token_env.clone()))?;
        Self::new(config, token.trim())
    }

    /// REST endpoint of one review comment
    pub fn comment_url(&self, id: &CommentId) -> String {
        format!(
            "{}/repos/{}/{}/pulls/comments/{}",
            self.api_base, self.owner, self.repo, id
        )
    }
}

impl CommentStore for GitHubCommentStore {
    fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()> {
        let url = self.comment_url(id);
        debug!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(&UpdateCommentRequest { body: new_body })
            .send()
            .map_err(|e| AckError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(AckError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        debug!("Comment {} updated ({})", id, status);
        Ok(())
    }
}
