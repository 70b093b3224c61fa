//! Like Status Fetcher - resolves whether the viewer already likes a post.
//!
//! Best effort: failures are logged and leave the state as it was.

use std::sync::Arc;
use std::time::Duration;

use blogs_domain::{PostId, ViewerId};
use tokio_util::sync::CancellationToken;

use super::bounded;
use super::state::{LikeCell, LikeState};
use crate::ports::outbound::{ApiError, BlogApiPort};

pub struct LikeStatusFetcher {
    api: Arc<dyn BlogApiPort>,
    post_id: PostId,
    cell: LikeCell,
    timeout: Duration,
    cancel: CancellationToken,
}

impl LikeStatusFetcher {
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

    /// Resolve the like status for `viewer`.
    ///
    /// Anonymous viewers resolve immediately to "not liked" without a
    /// request. Call again whenever the viewer changes; the newest call wins.
    pub async fn fetch(&self, viewer: Option<&ViewerId>) -> LikeState {
        let Some(viewer) = viewer else {
            return self.cell.resolve_anonymous();
        };

        let generation = self.cell.begin_status_fetch();
        let result = bounded(
            self.api.like_status(&self.post_id),
            self.timeout,
            &self.cancel,
        )
        .await;

        match result {
            Ok(status) => self.cell.finish_status_fetch(generation, Some(status.liked)),
            Err(ApiError::Cancelled) => {
                tracing::debug!(post_id = %self.post_id, "Like status fetch cancelled");
                // Only reached after dispose, so `loading` is left as is:
                // nothing renders this cell any more.
                self.cell.snapshot()
            }
            Err(e) if e.is_unauthorized() => {
                tracing::debug!(
                    post_id = %self.post_id,
                    viewer_id = %viewer,
                    "Session not accepted for like status"
                );
                self.cell.finish_status_fetch(generation, None)
            }
            Err(e) => {
                tracing::warn!(
                    post_id = %self.post_id,
                    viewer_id = %viewer,
                    error = %e,
                    "Failed to fetch like status"
                );
                self.cell.finish_status_fetch(generation, None)
            }
        }
    }
}
