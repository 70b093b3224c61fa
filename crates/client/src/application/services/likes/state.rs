//! Per-view like state and the cell the like services share.

use std::sync::{Arc, Mutex, MutexGuard};

use blogs_shared::ToggleLikeResponse;

/// Client-local like state for one post as seen by one viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    /// Whether the current viewer likes the post
    pub liked: bool,
    /// Displayed like total
    pub count: u32,
    /// A toggle request is in flight
    pub pending: bool,
    /// The like status has not been resolved yet
    pub loading: bool,
}

impl LikeState {
    /// State on mount: not liked, the post's like total, status unresolved.
    pub fn new(initial_count: u32) -> Self {
        Self {
            liked: false,
            count: initial_count,
            pending: false,
            loading: true,
        }
    }

    /// Whether a toggle may start right now.
    pub fn can_toggle(&self, signed_in: bool) -> bool {
        signed_in && !self.loading && !self.pending
    }
}

#[derive(Debug)]
struct LikeCellInner {
    state: LikeState,
    /// Bumped on every status fetch; only the latest fetch may write.
    status_generation: u64,
}

/// Shared handle to one view's [`LikeState`].
///
/// The lock is never held across an await point.
#[derive(Debug, Clone)]
pub struct LikeCell {
    inner: Arc<Mutex<LikeCellInner>>,
}

impl LikeCell {
    pub fn new(initial_count: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LikeCellInner {
                state: LikeState::new(initial_count),
                status_generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LikeCellInner> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn snapshot(&self) -> LikeState {
        self.lock().state
    }

    /// Resolve the status for an anonymous viewer without a request.
    pub(crate) fn resolve_anonymous(&self) -> LikeState {
        let mut inner = self.lock();
        inner.status_generation += 1;
        inner.state.liked = false;
        inner.state.loading = false;
        inner.state
    }

    /// Start a status fetch, superseding any fetch still in flight.
    pub(crate) fn begin_status_fetch(&self) -> u64 {
        let mut inner = self.lock();
        inner.status_generation += 1;
        inner.state.loading = true;
        inner.status_generation
    }

    /// Finish the fetch started as `generation`. `liked` is `None` when the
    /// fetch failed. Results of superseded fetches are dropped.
    pub(crate) fn finish_status_fetch(&self, generation: u64, liked: Option<bool>) -> LikeState {
        let mut inner = self.lock();
        if inner.status_generation != generation {
            return inner.state;
        }
        if let Some(liked) = liked {
            inner.state.liked = liked;
        }
        inner.state.loading = false;
        inner.state
    }

    /// Take the pending lock if a toggle is allowed.
    pub(crate) fn try_mark_pending(&self, signed_in: bool) -> bool {
        let mut inner = self.lock();
        if !inner.state.can_toggle(signed_in) {
            return false;
        }
        inner.state.pending = true;
        true
    }

    /// Apply a confirmed toggle.
    pub(crate) fn apply_toggle(&self, response: ToggleLikeResponse) -> LikeState {
        let mut inner = self.lock();
        let state = &mut inner.state;
        state.count = next_count(state.count, state.liked, response);
        state.liked = response.liked;
        inner.state
    }

    pub(crate) fn release_pending(&self) {
        self.lock().state.pending = false;
    }
}

/// Like total after a toggle.
///
/// An authoritative `likes` from the server wins. Otherwise the total moves
/// by one in the direction of the change relative to the local `liked`, and
/// stays put when the server reports the state we already had.
fn next_count(current: u32, previously_liked: bool, response: ToggleLikeResponse) -> u32 {
    if let Some(likes) = response.likes {
        return likes;
    }
    match (previously_liked, response.liked) {
        (false, true) => current.saturating_add(1),
        (true, false) => current.saturating_sub(1),
        _ => current,
    }
}
