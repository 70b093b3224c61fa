//! Blog API Port - HTTP boundary for posts and likes
//!
//! The session identity is never passed explicitly: the adapter attaches the
//! session credentials to every request, exactly like a browser would send
//! its session cookie.

use std::time::Duration;

use async_trait::async_trait;
use blogs_domain::PostId;
use blogs_shared::{CreatePostRequest, LikeStatusResponse, PostDto, ToggleLikeResponse};
use thiserror::Error;

/// Errors at the HTTP boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, reset...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The owner of the request went away before it finished
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HttpError { status: 401, .. })
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BlogApiPort: Send + Sync {
    /// `GET /api/posts`
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError>;

    /// `GET /api/posts/{id}`; `Ok(None)` when the post does not exist.
    async fn get_post(&self, post_id: &PostId) -> Result<Option<PostDto>, ApiError>;

    /// `GET /api/posts/{id}/like-status` for the session's viewer.
    async fn like_status(&self, post_id: &PostId) -> Result<LikeStatusResponse, ApiError>;

    /// `POST /api/posts/{id}/like`; the server flips the like and reports
    /// the resulting state.
    async fn toggle_like(&self, post_id: &PostId) -> Result<ToggleLikeResponse, ApiError>;

    /// `POST /api/posts`
    async fn create_post(&self, request: &CreatePostRequest) -> Result<(), ApiError>;
}
