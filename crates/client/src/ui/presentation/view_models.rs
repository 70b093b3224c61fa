//! View models - plain data derived from domain state for rendering
//!
//! Components stay thin: every label, disabled flag and formatted date is
//! computed here so it can be unit tested without a renderer.

use chrono::{DateTime, Utc};

use blogs_domain::common::{format_long_date, format_relative_date};
use blogs_domain::Post;

use crate::application::services::LikeState;

pub const LOADING_POST: &str = "Loading post...";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const NO_BLOGS_FOUND: &str = "No blogs found";
pub const HOME_SKELETON_CARDS: usize = 6;

/// Rendering state of the like control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeButtonModel {
    pub disabled: bool,
    /// Filled heart when liked
    pub filled: bool,
    pub aria_label: &'static str,
    pub count_label: String,
}

impl LikeButtonModel {
    pub fn new(state: &LikeState, signed_in: bool) -> Self {
        Self {
            disabled: !state.can_toggle(signed_in),
            filled: state.liked,
            aria_label: if state.liked {
                "Unlike this post"
            } else {
                "Like this post"
            },
            count_label: state.count.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorModel {
    pub name: String,
    pub image: String,
    pub avatar_alt: String,
}

impl AuthorModel {
    fn from_post(post: &Post) -> Self {
        Self {
            name: post.author.name.clone(),
            image: post.author.image.clone(),
            avatar_alt: post.author.avatar_alt(),
        }
    }
}

/// One card on the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardModel {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: AuthorModel,
    pub date_label: String,
    pub comment_count: u32,
    pub like_count: u32,
}

impl PostCardModel {
    pub fn new(post: &Post, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            excerpt: post.excerpt(),
            author: AuthorModel::from_post(post),
            date_label: format_relative_date(post.created_at, now),
            comment_count: post.comment_count(),
            like_count: post.like_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailModel {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorModel,
    pub date_label: String,
    pub comment_count: u32,
    pub like_count: u32,
}

impl PostDetailModel {
    pub fn new(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: AuthorModel::from_post(post),
            date_label: format_long_date(post.created_at),
            comment_count: post.comment_count(),
            like_count: post.like_count(),
        }
    }
}

/// Loading lifecycle of a remote resource
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Missing,
    Ready(T),
}
