//! Post payloads as returned by `GET /api/posts` and `GET /api/posts/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as serialized by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// The list endpoint may omit the author or some of its fields.
    #[serde(default)]
    pub author: Option<AuthorDto>,
    #[serde(rename = "_count", default)]
    pub count: PostCountDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The `_count` aggregate attached to every post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCountDto {
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub likes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn deserializes_api_shape() {
        let json = r##"{
            "id": "clx1",
            "title": "Hello",
            "content": "# Hi",
            "createdAt": "2025-01-05T09:00:00.000Z",
            "authorId": "u1",
            "author": { "name": "Ada", "image": "https://img/ada.png" },
            "_count": { "comments": 3, "likes": 5 }
        }"##;

        let post: PostDto = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "clx1");
        assert_eq!(post.created_at.year(), 2025);
        assert_eq!(post.count.likes, 5);
        assert_eq!(post.count.comments, 3);
        assert_eq!(post.content, "# Hi");
        assert_eq!(
            post.author.and_then(|a| a.name).as_deref(),
            Some("Ada")
        );
    }

    #[test]
    fn tolerates_missing_author_and_counts() {
        let json = r#"{
            "id": "clx2",
            "title": "Untitled",
            "content": "",
            "createdAt": "2025-01-05T09:00:00Z",
            "author": { "name": null }
        }"#;

        let post: PostDto = serde_json::from_str(json).unwrap();
        assert_eq!(post.count, PostCountDto::default());
        assert_eq!(post.author, Some(AuthorDto::default()));
    }
}
