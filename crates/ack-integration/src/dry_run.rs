//! Comment store that records updates without sending them

use ack_core::error::Result;
use ack_core::store::CommentStore;
use ack_core::types::CommentId;
use std::cell::RefCell;
use tracing::info;

/// Accepts every update and keeps the payloads for inspection
#[derive(Debug, Default)]
pub struct DryRunCommentStore {
    sent: RefCell<Vec<(CommentId, String)>>,
}

impl DryRunCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads accepted so far, in call order
    pub fn sent(&self) -> Vec<(CommentId, String)> {
        self.sent.borrow().clone()
    }
}

impl CommentStore for DryRunCommentStore {
    fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()> {
        info!("Dry run: not sending update for comment {}", id);
        self.sent.borrow_mut().push((id.clone(), new_body.to_string()));
        Ok(())
    }
}
