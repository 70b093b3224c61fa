//! Endpoint paths, as path segments relative to the API origin.
//!
//! Ids are kept as single raw segments. Callers append them with a URL
//! builder that percent-encodes each segment, so an id can never change
//! which endpoint is addressed.

pub const POSTS: [&str; 2] = ["api", "posts"];

pub fn post(id: &str) -> [&str; 3] {
    ["api", "posts", id]
}

pub fn like(id: &str) -> [&str; 4] {
    ["api", "posts", id, "like"]
}

pub fn like_status(id: &str) -> [&str; 4] {
    ["api", "posts", id, "like-status"]
}

/// Unencoded display form, e.g. `/api/posts/{id}/like`.
pub fn display(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}
