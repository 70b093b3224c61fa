//! Likes - status fetch, toggle, and the per-view controller that owns both.
//!
//! Every view that shows a like button owns one [`LikeController`]. Two views
//! of the same post do not share state: each keeps its own count and liked
//! flag until it fetches again.

mod state;
mod status;
mod toggle;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use blogs_domain::{PostId, Viewer, ViewerId};
use tokio_util::sync::CancellationToken;

use crate::ports::outbound::{ApiError, BlogApiPort};

pub use state::{LikeCell, LikeState};
pub use status::LikeStatusFetcher;
pub use toggle::{LikeToggleController, ToggleOutcome, TogglePermit};

/// Run an API call bounded by `timeout` and `cancel`.
///
/// Cancellation wins over a response that is ready at the same time.
pub(crate) async fn bounded<T>(
    call: impl Future<Output = Result<T, ApiError>>,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<T, ApiError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = tokio::time::timeout(timeout, call) => match result {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(timeout)),
        },
    }
}

/// Like state for one post in one view.
///
/// Dropping the controller (or calling [`Self::dispose`]) cancels requests
/// still in flight; their results are discarded.
pub struct LikeController {
    cell: LikeCell,
    status: LikeStatusFetcher,
    toggle: LikeToggleController,
    cancel: CancellationToken,
}

impl LikeController {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        post_id: PostId,
        initial_likes: u32,
        timeout: Duration,
    ) -> Self {
        let cell = LikeCell::new(initial_likes);
        let cancel = CancellationToken::new();

        Self {
            status: LikeStatusFetcher::new(
                api.clone(),
                post_id.clone(),
                cell.clone(),
                timeout,
                cancel.clone(),
            ),
            toggle: LikeToggleController::new(api, post_id, cell.clone(), timeout, cancel.clone()),
            cell,
            cancel,
        }
    }

    pub fn state(&self) -> LikeState {
        self.cell.snapshot()
    }

    /// Re-resolve the like status; call on mount and whenever the viewer changes.
    pub async fn refresh_status(&self, viewer: Option<&ViewerId>) -> LikeState {
        self.status.fetch(viewer).await
    }

    pub fn try_begin_toggle(&self, viewer: Option<&Viewer>) -> Option<TogglePermit> {
        self.toggle.try_begin(viewer)
    }

    pub async fn finish_toggle(&self, permit: TogglePermit) -> ToggleOutcome {
        self.toggle.complete(permit).await
    }

    pub async fn toggle(&self, viewer: Option<&Viewer>) -> ToggleOutcome {
        self.toggle.toggle(viewer).await
    }

    /// Cancel everything in flight. The controller accepts no new toggles.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }
}

impl Drop for LikeController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
