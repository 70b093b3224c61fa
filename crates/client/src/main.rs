//! Blogs client - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogs_client::config::{self, ClientConfig};
use blogs_client::infrastructure::http_client::ApiAdapter;
use blogs_client::infrastructure::session::StaticSession;
use blogs_client::ports::outbound::{BlogApiPort, SessionPort};
use blogs_client::presentation::Services;

const HEAD: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogs_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;

    tracing::info!(
        api_url = %config.api_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        signed_in = config.viewer.is_some(),
        "Starting Blogs client"
    );

    let api: Arc<dyn BlogApiPort> = Arc::new(
        ApiAdapter::new(config.api_url.clone(), config.request_timeout)
            .with_session(config.session_cookie.clone()),
    );
    let session: Arc<dyn SessionPort> = Arc::new(StaticSession::new(config.viewer.clone()));

    let desktop = dioxus::desktop::Config::new().with_custom_head(HEAD.to_string());

    dioxus::LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(Services::new(api, session, config.request_timeout))
        .launch(blogs_client::app);

    Ok(())
}
