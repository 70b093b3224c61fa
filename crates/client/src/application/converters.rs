//! Wire ↔ domain conversions for post payloads.

use blogs_domain::{Author, NewPost, Post, PostCounts, PostId};
use blogs_shared::{CreatePostRequest, PostDto};

use crate::application::ServiceError;

/// Convert an API post into the domain type, substituting author defaults.
pub fn post_from_dto(dto: PostDto) -> Result<Post, ServiceError> {
    let id = PostId::new(dto.id).map_err(|e| ServiceError::InvalidPayload(e.to_string()))?;
    let author = dto
        .author
        .map(|a| Author::or_defaults(a.name.as_deref(), a.image.as_deref()))
        .unwrap_or_default();

    Ok(Post {
        id,
        title: dto.title,
        content: dto.content,
        created_at: dto.created_at,
        author,
        counts: PostCounts {
            comments: dto.count.comments,
            likes: dto.count.likes,
        },
    })
}

pub fn create_post_request(post: &NewPost) -> CreatePostRequest {
    CreatePostRequest {
        title: post.title().to_string(),
        content: post.content().to_string(),
        published: post.published(),
    }
}
