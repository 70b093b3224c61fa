//! Like Toggle Controller - flips a like and reconciles the local state.
//!
//! The server decides whether a call likes or unlikes; the client only
//! records the state it reports. At most one toggle is in flight per view,
//! enforced by the `pending` flag rather than by deduplicating requests.

use std::sync::Arc;
use std::time::Duration;

use blogs_domain::{PostId, Viewer};
use tokio_util::sync::CancellationToken;

use super::bounded;
use super::state::{LikeCell, LikeState};
use crate::ports::outbound::{ApiError, BlogApiPort};

/// Result of a toggle attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Preconditions were not met; nothing was sent
    Skipped,
    /// The server confirmed the new state
    Applied(LikeState),
    /// The request failed; state is unchanged
    Failed,
    /// The view went away before the response arrived; state is unchanged
    Cancelled,
}

/// Proof that the pending lock is held.
///
/// Dropping the permit releases the lock, so an abandoned toggle future can
/// never leave the control disabled.
#[must_use = "dropping the permit releases the pending lock without sending the toggle"]
pub struct TogglePermit {
    cell: LikeCell,
}

impl Drop for TogglePermit {
    fn drop(&mut self) {
        self.cell.release_pending();
    }
}

pub struct LikeToggleController {
    api: Arc<dyn BlogApiPort>,
    post_id: PostId,
    cell: LikeCell,
    timeout: Duration,
    cancel: CancellationToken,
}

impl LikeToggleController {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        post_id: PostId,
        cell: LikeCell,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            api,
            post_id,
            cell,
            timeout,
            cancel,
        }
    }

    /// Synchronously take the pending lock.
    ///
    /// Returns `None` when there is no viewer, the status is still loading,
    /// or another toggle is pending.
    pub fn try_begin(&self, viewer: Option<&Viewer>) -> Option<TogglePermit> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.cell
            .try_mark_pending(viewer.is_some())
            .then(|| TogglePermit {
                cell: self.cell.clone(),
            })
    }

    /// Send the toggle for a permit obtained from [`Self::try_begin`].
    pub async fn complete(&self, permit: TogglePermit) -> ToggleOutcome {
        let result = bounded(
            self.api.toggle_like(&self.post_id),
            self.timeout,
            &self.cancel,
        )
        .await;

        let outcome = match result {
            Ok(response) => ToggleOutcome::Applied(self.cell.apply_toggle(response)),
            Err(ApiError::Cancelled) => {
                tracing::debug!(post_id = %self.post_id, "Like toggle cancelled");
                ToggleOutcome::Cancelled
            }
            Err(e) => {
                tracing::warn!(post_id = %self.post_id, error = %e, "Failed to toggle like");
                ToggleOutcome::Failed
            }
        };

        drop(permit);
        match outcome {
            ToggleOutcome::Applied(_) => ToggleOutcome::Applied(self.cell.snapshot()),
            other => other,
        }
    }

    /// Take the lock and send the toggle in one call.
    pub async fn toggle(&self, viewer: Option<&Viewer>) -> ToggleOutcome {
        match self.try_begin(viewer) {
            Some(permit) => self.complete(permit).await,
            None => ToggleOutcome::Skipped,
        }
    }
}
