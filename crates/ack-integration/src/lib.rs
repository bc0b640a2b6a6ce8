//! ack-integration - Git and GitHub integration for review-ack
//!
//! Implementations of the collaborator traits from `ack_core::store`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ack_core::store::{CommentStore, RevisionProvider};
//! use ack_integration::{GitHubCommentStore, GitRevisionProvider};
//!
//! let revision = GitRevisionProvider::new().current_revision()?;
//! let store = GitHubCommentStore::from_env(&config.github)?;
//! store.update_comment_body(&id, &new_body)?;
//! ```

pub mod dry_run;
pub mod github;
pub mod revision;

pub use dry_run::DryRunCommentStore;
pub use github::GitHubCommentStore;
pub use revision::{FixedRevision, GitRevisionProvider};
