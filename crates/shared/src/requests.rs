//! Request bodies sent to the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub published: bool,
}
