//! Applying a batch of comment updates

use crate::comment::{CommentIndex, CommentRecord, CommentReconciler, PendingUpdate};
use crate::error::AckError;
use crate::store::CommentStore;
use crate::types::CommentId;
use tracing::{info, warn};

/// Outcome of sending one update
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Store accepted the new body
    Updated(PendingUpdate),
    /// Store rejected the update or could not be reached
    Failed { id: CommentId, error: AckError },
}

impl UpdateOutcome {
    pub fn id(&self) -> &CommentId {
        match self {
            UpdateOutcome::Updated(update) => &update.id,
            UpdateOutcome::Failed { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }
}

/// Progress notification from [`apply_updates`]
#[derive(Debug)]
pub enum UpdateEvent<'a> {
    /// About to send the update for this id
    Started(&'a CommentId),
    /// The store answered for this id
    Finished(&'a UpdateOutcome),
}

/// Counts for the end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub updated: usize,
    pub failed: usize,
    pub not_found: usize,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[UpdateOutcome], not_found: usize, skipped: usize) -> Self {
        let updated = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            updated,
            failed: outcomes.len() - updated,
            not_found,
            skipped,
        }
    }
}

/// Drop updates whose current record is already addressed.
///
/// Returns the remaining updates and the ids that were skipped.
pub fn skip_addressed(
    records: &[CommentRecord],
    updates: Vec<PendingUpdate>,
) -> (Vec<PendingUpdate>, Vec<CommentId>) {
    let reconciler = CommentReconciler::new();
    let index = CommentIndex::new(records);
    let mut skipped = Vec::new();

    let kept = updates
        .into_iter()
        .filter(|update| {
            let addressed = index
                .get(&update.id)
                .map(|record| reconciler.classify(record).addressed)
                .unwrap_or(false);
            if addressed {
                info!("Comment {} already addressed, skipping", update.id);
                skipped.push(update.id.clone());
            }
            !addressed
        })
        .collect();

    (kept, skipped)
}

/// Send each update through the store, one at a time.
///
/// A failure only affects its own id; the remaining updates are still sent
/// and nothing already sent is rolled back.
pub fn apply_updates<S, F>(store: &S, updates: Vec<PendingUpdate>, mut on_event: F) -> Vec<UpdateOutcome>
where
    S: CommentStore + ?Sized,
    F: FnMut(UpdateEvent<'_>),
{
    let mut outcomes = Vec::with_capacity(updates.len());

    for update in updates {
        info!("Updating comment {}", update.id);
        on_event(UpdateEvent::Started(&update.id));
        let outcome = match store.update_comment_body(&update.id, &update.new_body) {
            Ok(()) => UpdateOutcome::Updated(update),
            Err(error) => {
                warn!("Failed to update comment {}: {}", update.id, error);
                UpdateOutcome::Failed {
                    id: update.id,
                    error,
                }
            }
        };
        on_event(UpdateEvent::Finished(&outcome));
        outcomes.push(outcome);
    }

    outcomes
}
