//! Routed pages

pub mod create_post;
pub mod home;
pub mod post_detail;

pub use create_post::CreatePostView;
pub use home::HomeView;
pub use post_detail::PostDetailView;
