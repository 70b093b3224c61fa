//! HTTP adapter for the blog API

use std::time::Duration;

use async_trait::async_trait;
use blogs_domain::PostId;
use blogs_shared::{routes, CreatePostRequest, LikeStatusResponse, PostDto, ToggleLikeResponse};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::ports::outbound::{ApiError, BlogApiPort};

/// Session credentials attached to every request as a cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn header_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
    timeout: Duration,
    session: Option<SessionCookie>,
}

impl ApiAdapter {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            timeout,
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<SessionCookie>) -> Self {
        self.session = session;
        self
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    ///
    /// `.` and `..` are refused: the URL builder would drop them and address
    /// a different endpoint.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::RequestFailed(format!(
                "invalid path segment {bad:?} in {}",
                routes::display(segments)
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::RequestFailed(format!("base url {} cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(cookie) => request.header(header::COOKIE, cookie.header_value()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::RequestFailed(error.to_string())
        }
    }

    async fn ensure_success(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %message, "API returned error status");
        Err(ApiError::http(status.as_u16(), message))
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(segments)?)).await?;
        let response = self.ensure_success(response).await?;
        self.parse(response).await
    }
}

#[async_trait]
impl BlogApiPort for ApiAdapter {
    async fn list_posts(&self) -> Result<Vec<PostDto>, ApiError> {
        self.get_json(&routes::POSTS).await
    }

    async fn get_post(&self, post_id: &PostId) -> Result<Option<PostDto>, ApiError> {
        let response = self
            .send(self.client.get(self.url(&routes::post(post_id.as_str()))?))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.ensure_success(response).await?;
        self.parse(response).await.map(Some)
    }

    async fn like_status(&self, post_id: &PostId) -> Result<LikeStatusResponse, ApiError> {
        self.get_json(&routes::like_status(post_id.as_str())).await
    }

    async fn toggle_like(&self, post_id: &PostId) -> Result<ToggleLikeResponse, ApiError> {
        let response = self
            .send(self.client.post(self.url(&routes::like(post_id.as_str()))?))
            .await?;
        let response = self.ensure_success(response).await?;
        self.parse(response).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<(), ApiError> {
        let body =
            serde_json::to_vec(request).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let response = self
            .send(
                self.client
                    .post(self.url(&routes::POSTS)?)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body),
            )
            .await?;
        self.ensure_success(response).await?;
        Ok(())
    }
}
