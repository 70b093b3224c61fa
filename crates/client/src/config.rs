//! Client configuration loaded from the environment.
//!
//! `main` loads `.env.local` / `.env` with dotenvy before calling
//! [`ClientConfig::from_env`]. Every value has a default so the client starts
//! against a local API with no configuration at all.

use std::time::Duration;

use blogs_domain::{Role, Viewer, ViewerId};
use thiserror::Error;
use url::Url;

use crate::application::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::infrastructure::http_client::SessionCookie;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_SESSION_COOKIE: &str = "next-auth.session-token";

pub const ENV_API_URL: &str = "BLOGS_API_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "BLOGS_REQUEST_TIMEOUT_MS";
pub const ENV_SESSION_TOKEN: &str = "BLOGS_SESSION_TOKEN";
pub const ENV_SESSION_COOKIE: &str = "BLOGS_SESSION_COOKIE";
pub const ENV_VIEWER_ID: &str = "BLOGS_VIEWER_ID";
pub const ENV_VIEWER_NAME: &str = "BLOGS_VIEWER_NAME";
pub const ENV_VIEWER_ROLE: &str = "BLOGS_VIEWER_ROLE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BLOGS_API_URL is not a valid URL ({value}): {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub request_timeout: Duration,
    pub session_cookie: Option<SessionCookie>,
    pub viewer: Option<Viewer>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_url = get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw_url.clone(),
            source,
        })?;

        let timeout_ms = match get(ENV_REQUEST_TIMEOUT_MS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_REQUEST_TIMEOUT_MS,
                        "Invalid BLOGS_REQUEST_TIMEOUT_MS, using default"
                    );
                    DEFAULT_REQUEST_TIMEOUT_MS
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let session_cookie = get(ENV_SESSION_TOKEN).map(|token| {
            let name =
                get(ENV_SESSION_COOKIE).unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string());
            SessionCookie::new(name, token)
        });

        let viewer = get(ENV_VIEWER_ID)
            .and_then(|id| ViewerId::new(id).ok())
            .map(|id| {
                let mut viewer = Viewer::new(id);
                if let Some(name) = get(ENV_VIEWER_NAME) {
                    viewer = viewer.with_name(name);
                }
                if let Some(raw) = get(ENV_VIEWER_ROLE) {
                    match raw.parse::<Role>() {
                        Ok(role) => viewer = viewer.with_role(role),
                        Err(e) => {
                            tracing::warn!(value = %raw, error = %e, "Invalid BLOGS_VIEWER_ROLE, using USER")
                        }
                    }
                }
                viewer
            });

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            session_cookie,
            viewer,
        })
    }
}

/// Load `.env.local` then `.env` from the working directory; earlier files win.
pub fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        if dotenvy::from_filename(filename).is_ok() {
            tracing::debug!(file = filename, "Loaded environment file");
        }
    }
}
