//! Blogs Domain - posts, viewers, and the rules that hold between them.
//!
//! This crate has no I/O. Everything here is plain data plus validation
//! and presentation-neutral formatting helpers used by the client.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Author, NewPost, Post, PostCounts, Role, Viewer};
pub use error::DomainError;
pub use ids::{PostId, ViewerId};
