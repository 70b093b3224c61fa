//! Application services

pub mod likes;
pub mod post_service;

pub use likes::{
    LikeCell, LikeController, LikeState, LikeStatusFetcher, LikeToggleController, ToggleOutcome,
    TogglePermit,
};
pub use post_service::PostService;
