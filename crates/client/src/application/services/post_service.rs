//! Post Service - listing, loading, and creating posts
//!
//! Unlike the like services, failures here are returned to the caller so
//! the UI can show them.

use std::sync::Arc;

use blogs_domain::{NewPost, Post, PostId};

use crate::application::ServiceError;
use crate::application::converters::{create_post_request, post_from_dto};
use crate::ports::outbound::BlogApiPort;

#[derive(Clone)]
pub struct PostService {
    api: Arc<dyn BlogApiPort>,
}

impl PostService {
    pub fn new(api: Arc<dyn BlogApiPort>) -> Self {
        Self { api }
    }

    /// All posts for the home page.
    ///
    /// Entries the client cannot represent are skipped with a warning rather
    /// than failing the whole list.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
        let dtos = self.api.list_posts().await?;
        let posts = dtos
            .into_iter()
            .filter_map(|dto| match post_from_dto(dto) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed post");
                    None
                }
            })
            .collect();
        Ok(posts)
    }

    /// A single post, or `None` when it does not exist.
    pub async fn get_post(&self, post_id: &PostId) -> Result<Option<Post>, ServiceError> {
        match self.api.get_post(post_id).await? {
            Some(dto) => post_from_dto(dto).map(Some),
            None => Ok(None),
        }
    }

    /// Create a post from raw form input.
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        published: bool,
    ) -> Result<(), ServiceError> {
        let post = NewPost::new(title, content, published)?;
        self.api.create_post(&create_post_request(&post)).await?;
        tracing::info!(title = %post.title(), published, "Post created");
        Ok(())
    }
}
