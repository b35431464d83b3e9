//! HTTP API module
//!
//! This module contains the endpoints that forward user actions to the clock
//! controller, and their response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/reset-shot-clock", post(reset_shot_clock_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn app() -> Router {
        create_router(Arc::new(AppState::new(20024, "127.0.0.1".to_string())))
    }

    #[tokio::test(start_paused = true)]
    async fn status_reports_starting_values() {
        let app = app();
        let (status, body) = call(&app, "GET", "/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["clock"],
            json!({ "game_clock": { "minutes": 12, "seconds": 0 }, "shot_clock": 24, "running": false })
        );
        assert_eq!(body["game_clock_display"], "12:00");
        assert_eq!(body["shot_clock_display"], "24");
        assert_eq!(body["last_action"], Value::Null);
    }

    #[tokio::test(start_paused = true)]
    async fn actions_drive_the_clocks() {
        let app = app();

        let (status, body) = call(&app, "POST", "/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["clock"]["running"], true);

        tokio::time::sleep(Duration::from_millis(3_500)).await;

        let (_, body) = call(&app, "POST", "/reset-shot-clock").await;
        assert_eq!(body["status"], "running");
        assert_eq!(body["clock"]["shot_clock"], 24);
        assert_eq!(body["clock"]["game_clock"], json!({ "minutes": 11, "seconds": 57 }));

        let (_, body) = call(&app, "POST", "/stop").await;
        assert_eq!(body["status"], "paused");
        assert_eq!(body["clock"]["running"], false);

        let (_, body) = call(&app, "GET", "/status").await;
        assert_eq!(body["game_clock_display"], "11:57");
        assert_eq!(body["last_action"], "stop");
    }

    #[tokio::test(start_paused = true)]
    async fn health_is_ok() {
        let (status, body) = call(&app(), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test(start_paused = true)]
    async fn actions_require_post() {
        let response = app()
            .oneshot(Request::builder().uri("/start").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
