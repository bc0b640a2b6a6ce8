//! Comment module
//!
//! Comment records, id indexing, and status reconciliation.

pub mod model;
pub mod index;
pub mod reconciler;

pub use model::*;
pub use index::CommentIndex;
pub use reconciler::{CommentReconciler, PendingUpdate, PendingUpdates, STATUS_MARKER};
