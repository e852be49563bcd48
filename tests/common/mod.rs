use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use rollcall::config::cors::CorsConfig;
use rollcall::router::init_router;
use rollcall::state::AppState;

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

/// Sends a request with a JSON body and returns status plus parsed body.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

/// Sends a body-less request (GET/DELETE) and returns status plus parsed body.
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

/// Inserts a class directly, bypassing the API.
#[allow(dead_code)]
pub async fn seed_class(pool: &PgPool, name: &str, teacher_id: &str, student_ids: &[&str]) -> Uuid {
    let student_ids: Vec<String> = student_ids.iter().map(|s| s.to_string()).collect();
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO classes (name, teacher_id, student_ids) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(teacher_id)
    .bind(student_ids)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a session directly, bypassing the API.
#[allow(dead_code)]
pub async fn seed_session(pool: &PgPool, class_id: &str, name: &str, start_at: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO sessions (class_id, name, start_at, end_at) \
         VALUES ($1, $2, $3, $3) RETURNING id",
    )
    .bind(class_id)
    .bind(name)
    .bind(start_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_teacher_id() -> String {
    format!("teacher-{}", Uuid::new_v4())
}
