//! `ApiAdapter` against a local axum server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

use blogs_client::infrastructure::http_client::{ApiAdapter, SessionCookie};
use blogs_client::ports::outbound::{ApiError, BlogApiPort};
use blogs_domain::PostId;
use blogs_shared::CreatePostRequest;

const COOKIE_NAME: &str = "next-auth.session-token";
const TOKEN: &str = "secret-token";

#[derive(Clone, Default)]
struct Recorded {
    created: Arc<Mutex<Option<Value>>>,
}

fn post_json(id: &str, likes: u32) -> Value {
    json!({
        "id": id,
        "title": "Hello",
        "content": "# Body",
        "createdAt": "2025-01-05T09:00:00.000Z",
        "author": { "name": "Ada", "image": null },
        "_count": { "comments": 2, "likes": likes }
    })
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(&format!("{COOKIE_NAME}={TOKEN}")))
}

async fn list_posts() -> Json<Value> {
    Json(json!([post_json("p1", 5), post_json("p2", 0)]))
}

async fn get_post(Path(id): Path<String>) -> impl IntoResponse {
    if id == "p1" {
        Json(post_json("p1", 5)).into_response()
    } else {
        (StatusCode::NOT_FOUND, "Post not found").into_response()
    }
}

async fn like_status(headers: HeaderMap) -> impl IntoResponse {
    if signed_in(&headers) {
        Json(json!({ "liked": true })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

async fn toggle_like(headers: HeaderMap) -> impl IntoResponse {
    if signed_in(&headers) {
        Json(json!({ "liked": true, "likes": 6 })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

async fn create_post(State(recorded): State<Recorded>, Json(body): Json<Value>) -> StatusCode {
    *recorded.created.lock().unwrap() = Some(body);
    StatusCode::CREATED
}

fn api_router(recorded: Recorded) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post))
        .route("/api/posts/{id}/like-status", get(like_status))
        .route("/api/posts/{id}/like", post(toggle_like))
        .with_state(recorded)
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn adapter(base: Url, session: bool) -> ApiAdapter {
    let cookie = session.then(|| SessionCookie::new(COOKIE_NAME, TOKEN));
    ApiAdapter::new(base, Duration::from_secs(5)).with_session(cookie)
}

fn pid(id: &str) -> PostId {
    PostId::new(id).unwrap()
}

#[tokio::test]
async fn lists_and_fetches_posts() {
    let base = serve(api_router(Recorded::default())).await;
    let api = adapter(base, false);

    let posts = api.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].count.likes, 5);
    assert_eq!(posts[0].author.as_ref().unwrap().image, None);

    let post = api.get_post(&pid("p1")).await.unwrap().unwrap();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.count.comments, 2);
}

#[tokio::test]
async fn missing_post_is_none() {
    let base = serve(api_router(Recorded::default())).await;
    let api = adapter(base, false);

    assert_eq!(api.get_post(&pid("nope")).await.unwrap(), None);
}

#[tokio::test]
async fn like_calls_forward_the_session_cookie() {
    let base = serve(api_router(Recorded::default())).await;

    let signed_in = adapter(base.clone(), true);
    assert!(signed_in.like_status(&pid("p1")).await.unwrap().liked);
    let toggled = signed_in.toggle_like(&pid("p1")).await.unwrap();
    assert!(toggled.liked);
    assert_eq!(toggled.likes, Some(6));

    let anonymous = adapter(base, false);
    let err = anonymous.like_status(&pid("p1")).await.unwrap_err();
    assert!(err.is_unauthorized());
    let err = anonymous.toggle_like(&pid("p1")).await.unwrap_err();
    assert_eq!(err, ApiError::http(401, "Unauthorized"));
}

#[tokio::test]
async fn create_post_sends_the_form_body() {
    let recorded = Recorded::default();
    let base = serve(api_router(recorded.clone())).await;
    let api = adapter(base, true);

    let request = CreatePostRequest {
        title: "New".into(),
        content: "Body".into(),
        published: true,
    };
    api.create_post(&request).await.unwrap();

    let body = recorded.created.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({ "title": "New", "content": "Body", "published": true })
    );
}

#[tokio::test]
async fn server_errors_and_bad_bodies_are_reported() {
    let router = Router::new()
        .route("/api/posts", get(|| async { "definitely not json" }))
        .route(
            "/api/posts/{id}/like",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/posts/{id}/like-status",
            get(|| async { Json(json!({ "unexpected": 1 })) }),
        );
    let base = serve(router).await;
    let api = adapter(base, true);

    assert!(matches!(
        api.list_posts().await,
        Err(ApiError::ParseError(_))
    ));
    assert_eq!(
        api.toggle_like(&pid("p1")).await.unwrap_err(),
        ApiError::http(500, "boom")
    );
    assert!(matches!(
        api.like_status(&pid("p1")).await,
        Err(ApiError::ParseError(_))
    ));
}

#[tokio::test]
async fn slow_server_times_out() {
    let router = Router::new().route(
        "/api/posts/{id}/like",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "liked": true }))
        }),
    );
    let base = serve(router).await;
    let timeout = Duration::from_millis(100);
    let api = ApiAdapter::new(base, timeout);

    let err = api.toggle_like(&pid("p1")).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout(timeout));
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = adapter(Url::parse(&format!("http://{addr}")).unwrap(), false);

    assert!(matches!(
        api.list_posts().await,
        Err(ApiError::RequestFailed(_))
    ));
}
