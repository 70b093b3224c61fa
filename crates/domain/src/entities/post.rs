//! Post entity - a single blog entry with its author and engagement counts
//!
//! Posts are created and stored by the blog API. On the client they are
//! read-only; the like count shown to a viewer is tracked separately by the
//! like controller.

use chrono::{DateTime, Utc};

use crate::common::{excerpt, none_if_blank};
use crate::PostId;

/// Name shown when the API returns a post without an author name.
pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";

/// Avatar shown when the API returns a post without an author image.
pub const DEFAULT_AUTHOR_IMAGE: &str = "/default-avatar.png";

/// Number of content characters shown on a post card.
pub const CARD_EXCERPT_CHARS: usize = 100;

/// A published blog post
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown source
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: Author,
    pub counts: PostCounts,
}

impl Post {
    /// Content shortened for list cards.
    pub fn excerpt(&self) -> String {
        excerpt(&self.content, CARD_EXCERPT_CHARS)
    }

    pub fn like_count(&self) -> u32 {
        self.counts.likes
    }

    pub fn comment_count(&self) -> u32 {
        self.counts.comments
    }
}

/// The author reference embedded in a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Avatar image URL
    pub image: String,
}

impl Author {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Build an author from possibly-missing API fields, substituting
    /// [`DEFAULT_AUTHOR_NAME`] and [`DEFAULT_AUTHOR_IMAGE`].
    pub fn or_defaults(name: Option<&str>, image: Option<&str>) -> Self {
        Self::new(
            none_if_blank(name).unwrap_or(DEFAULT_AUTHOR_NAME),
            none_if_blank(image).unwrap_or(DEFAULT_AUTHOR_IMAGE),
        )
    }

    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> String {
        format!("{}'s avatar", self.name)
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_IMAGE)
    }
}

/// Aggregate engagement counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostCounts {
    pub comments: u32,
    pub likes: u32,
}
