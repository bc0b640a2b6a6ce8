//! External collaborator traits
//!
//! The reconciler never talks to git or the network itself. Revision lookup
//! and comment updates go through these traits so they can be swapped for
//! fakes.

use crate::error::Result;
use crate::types::CommentId;

/// Source of the current version-control revision
pub trait RevisionProvider {
    /// Current revision identifier (typically a full commit hash)
    fn current_revision(&self) -> Result<String>;
}

/// Remote store holding the review comments
pub trait CommentStore {
    /// Replace the body of a comment
    fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()>;
}

impl<T: RevisionProvider + ?Sized> RevisionProvider for &T {
    fn current_revision(&self) -> Result<String> {
        (**self).current_revision()
    }
}

impl<T: CommentStore + ?Sized> CommentStore for &T {
    fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()> {
        (**self).update_comment_body(id, new_body)
    }
}

impl<T: CommentStore + ?Sized> CommentStore for Box<T> {
    fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()> {
        (**self).update_comment_body(id, new_body)
    }
}

/// In-memory fakes for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::AckError;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Revision provider returning a fixed value
    pub struct StaticRevision(pub String);

    impl RevisionProvider for StaticRevision {
        fn current_revision(&self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Comment store that records calls and fails for selected ids
    #[derive(Default)]
    pub struct MemoryCommentStore {
        pub sent: RefCell<Vec<(CommentId, String)>>,
        pub failing: HashSet<String>,
    }

    impl MemoryCommentStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(ids: &[CommentId]) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                failing: ids.iter().map(CommentId::key).collect(),
            }
        }
    }

    impl CommentStore for MemoryCommentStore {
        fn update_comment_body(&self, id: &CommentId, new_body: &str) -> Result<()> {
            if self.failing.contains(&id.key()) {
                return Err(AckError::Api {
                    status: 422,
                    message: "Validation Failed".to_string(),
                });
            }
            self.sent.borrow_mut().push((id.clone(), new_body.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_memory_store_records_calls() {
        let store = MemoryCommentStore::failing_on(&[CommentId::Number(2)]);
        assert!(store.update_comment_body(&CommentId::Number(1), "a").is_ok());
        assert!(store.update_comment_body(&CommentId::Number(2), "b").is_err());
        assert_eq!(store.sent.borrow().len(), 1);
    }

    #[test]
    fn test_reference_impls_delegate() {
        let revision = StaticRevision("cafe".to_string());
        let by_ref: &dyn RevisionProvider = &revision;
        assert_eq!(by_ref.current_revision().unwrap(), "cafe");
    }
}
