use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use photoshare_core::types::DbId;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use photoshare_api::config::ServerConfig;
use photoshare_api::routes;
use photoshare_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        images_dir: "public/images".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------
// The API is read-only by design, so tests seed rows directly instead of
// going through a repository write path (there is none).

/// Insert a user with empty profile fields, returning its id.
pub async fn seed_user(pool: &PgPool, first_name: &str, last_name: &str) -> DbId {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO users (first_name, last_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a user with a full profile, returning its id.
pub async fn seed_user_full(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    location: &str,
    description: &str,
    occupation: &str,
) -> DbId {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO users (first_name, last_name, location, description, occupation)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(location)
    .bind(description)
    .bind(occupation)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a photo with the given embedded comments array, returning its id.
pub async fn seed_photo(
    pool: &PgPool,
    user_id: DbId,
    file_name: &str,
    date_time: &str,
    comments: serde_json::Value,
) -> DbId {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO photos (user_id, file_name, date_time, comments)
         VALUES ($1, $2, $3::timestamptz, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(file_name)
    .bind(date_time)
    .bind(comments)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Build one embedded comment document.
pub fn comment_doc(id: DbId, author_id: DbId, text: &str, date_time: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "comment": text,
        "date_time": date_time,
        "user_id": author_id,
    })
}
