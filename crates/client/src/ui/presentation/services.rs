//! Service providers for the presentation layer
//!
//! The composition root builds one [`Services`] bundle and hands it to
//! Dioxus as context. Components reach application services through the
//! `use_*` hooks below and never touch infrastructure types.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::application::services::{LikeController, PostService};
use crate::ports::outbound::{BlogApiPort, SessionPort};

#[derive(Clone)]
pub struct Services {
    pub posts: Arc<PostService>,
    pub api: Arc<dyn BlogApiPort>,
    pub session: Arc<dyn SessionPort>,
    /// Upper bound for each like request
    pub like_timeout: Duration,
}

impl Services {
    pub fn new(
        api: Arc<dyn BlogApiPort>,
        session: Arc<dyn SessionPort>,
        like_timeout: Duration,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(api.clone())),
            api,
            session,
            like_timeout,
        }
    }

    /// A fresh controller for one like button.
    pub fn like_controller(
        &self,
        post_id: blogs_domain::PostId,
        initial_likes: u32,
    ) -> LikeController {
        LikeController::new(self.api.clone(), post_id, initial_likes, self.like_timeout)
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the PostService from context
pub fn use_post_service() -> Arc<PostService> {
    let services = use_context::<Services>();
    services.posts.clone()
}
