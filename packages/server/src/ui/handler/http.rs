//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{OnlineUserDto, OnlineUsersDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Users currently online, sorted by id
pub async fn online_users(State(state): State<Arc<AppState>>) -> Json<OnlineUsersDto> {
    let sessions = state.get_online_users_usecase.execute().await;

    // Domain Model から DTO への変換
    let users: Vec<OnlineUserDto> = sessions.iter().map(OnlineUserDto::from).collect();
    Json(OnlineUsersDto {
        count: users.len(),
        users,
    })
}
