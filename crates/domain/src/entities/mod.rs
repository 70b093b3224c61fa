//! Domain entities - Core business objects with identity

mod new_post;
mod post;
mod viewer;

pub use new_post::NewPost;
pub use post::{
    Author, Post, PostCounts, CARD_EXCERPT_CHARS, DEFAULT_AUTHOR_IMAGE, DEFAULT_AUTHOR_NAME,
};
pub use viewer::{Role, Viewer};
