//! Blogs Protocol - wire types for the blog REST API
//!
//! This crate mirrors the JSON the API actually sends and accepts:
//! - Post payloads, including the `_count` aggregate and `createdAt`
//! - Like status / toggle responses
//! - The create-post request body
//! - Path builders for every endpoint the client calls
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json, and chrono
//! 2. **No business logic** - pure data types and serialization
//! 3. **No domain IDs** - ids are raw strings on the wire

pub mod dto;
pub mod requests;
pub mod responses;
pub mod routes;

pub use dto::{AuthorDto, PostCountDto, PostDto};
pub use requests::CreatePostRequest;
pub use responses::{LikeStatusResponse, ToggleLikeResponse};
