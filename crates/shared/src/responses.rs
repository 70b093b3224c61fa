//! Response bodies of the like endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/posts/{id}/like-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatusResponse {
    pub liked: bool,
}

/// Body of `POST /api/posts/{id}/like`
///
/// `liked` is the state *after* the server flipped it. Servers that also
/// report the resulting like total send it as `likes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}
