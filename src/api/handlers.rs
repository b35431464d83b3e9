//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::info;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /start - Start both clocks
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let clock = state.start_clock();
    info!("Start endpoint called - clocks running");
    Json(ApiResponse::new("Clocks started".to_string(), clock))
}

/// Handle POST /stop - Pause both clocks
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let clock = state.stop_clock();
    info!("Stop endpoint called - clocks paused");
    Json(ApiResponse::new("Clocks stopped".to_string(), clock))
}

/// Handle POST /reset-shot-clock - Put the shot clock back to its starting value
pub async fn reset_shot_clock_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let clock = state.reset_shot_clock();
    info!("Reset endpoint called - shot clock at {}", clock.shot_clock);
    Json(ApiResponse::new("Shot clock reset".to_string(), clock))
}

/// Handle GET /status - Return current clock values and server info
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let clock = state.clock.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        clock,
        game_clock_display: clock.game_clock.to_string(),
        shot_clock_display: clock.shot_clock.to_string(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
