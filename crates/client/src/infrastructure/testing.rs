//! Scripted `BlogApiPort` for tests that need a request to stay in flight.
//!
//! `mockall` expectations resolve immediately, which is not enough to test
//! what happens *while* a like request is pending. Each scripted step can be
//! held behind a [`Notify`] gate or yield once before answering.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blogs_domain::PostId;
use blogs_shared::{CreatePostRequest, LikeStatusResponse, PostDto, ToggleLikeResponse};
use tokio::sync::Notify;

use crate::ports::outbound::{ApiError, BlogApiPort};

/// One scripted answer
pub struct Step<T> {
    gate: Arc<Notify>,
    gated: bool,
    yield_first: bool,
    result: Result<T, ApiError>,
}

impl<T> Step<T> {
    /// Answer on first poll.
    pub fn ready(result: Result<T, ApiError>) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            gated: false,
            yield_first: false,
            result,
        }
    }

    /// Answer once the returned gate is notified.
    pub fn gated(result: Result<T, ApiError>) -> Self {
        Self {
            gated: true,
            ..Self::ready(result)
        }
    }

    /// Return `Pending` once, then answer.
    pub fn yielding(result: Result<T, ApiError>) -> Self {
        Self {
            yield_first: true,
            ..Self::ready(result)
        }
    }

    async fn run(self) -> Result<T, ApiError> {
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        if self.gated {
            self.gate.notified().await;
        }
        self.result
    }
}

#[derive(Default)]
pub struct ScriptedApi {
    status_steps: Mutex<VecDeque<Step<LikeStatusResponse>>>,
    toggle_steps: Mutex<VecDeque<Step<ToggleLikeResponse>>>,
    status_calls: AtomicUsize,
    toggle_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn push_status(&self, step: Step<LikeStatusResponse>) -> Arc<Notify> {
        let gate = step.gate.clone();
        self.status_steps
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(step);
        gate
    }

    pub fn push_toggle(&self, step: Step<ToggleLikeResponse>) -> Arc<Notify> {
        let gate = step.gate.clone();
        self.toggle_steps
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(step);
        gate
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn toggle_calls(&self) -> usize {
        self.toggle_calls.load(Ordering::SeqCst)
    }

    pub async fn wait_for_status_calls(&self, n: usize) {
        while self.status_calls() < n {
            tokio::task::yield_now().await;
        }
    }

    pub async fn wait_for_toggle_calls(&self, n: usize) {
        while self.toggle_calls() < n {
            tokio::task::yield_now().await;
        }
    }

    fn next<T>(steps: &Mutex<VecDeque<Step<T>>>) -> Option<Step<T>> {
        steps.lock().unwrap_or_else(|p| p.into_inner()).pop_front()
    }
}

#[async_trait]
impl BlogApiPort for ScriptedApi {
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_post(&self, _post_id: &PostId) -> Result<Option<PostDto>, ApiError> {
        Ok(None)
    }

    async fn like_status(&self, _post_id: &PostId) -> Result<LikeStatusResponse, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        match Self::next(&self.status_steps) {
            Some(step) => step.run().await,
            None => Err(ApiError::RequestFailed("no scripted like-status".into())),
        }
    }

    async fn toggle_like(&self, _post_id: &PostId) -> Result<ToggleLikeResponse, ApiError> {
        self.toggle_calls.fetch_add(1, Ordering::SeqCst);
        match Self::next(&self.toggle_steps) {
            Some(step) => step.run().await,
            None => Err(ApiError::RequestFailed("no scripted toggle".into())),
        }
    }

    async fn create_post(&self, _request: &CreatePostRequest) -> Result<(), ApiError> {
        Ok(())
    }
}
