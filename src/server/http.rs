//! HTTP API endpoint handlers for room CRUD.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::domain::GameError;

use super::{protocol::RoomSnapshot, state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Request body for room creation. The code is optional; omitting it asks
/// the server to generate one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRoomRequest {
    pub code: Option<String>,
}

/// Create a room, optionally with an explicit code
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomSnapshot>), StatusCode> {
    let created_at = state.clock.now_millis();
    let mut game = state.game.lock().await;

    match game.rooms.create(req.code, created_at) {
        Ok(room) => {
            tracing::info!("Room '{}' created", room.code);
            Ok((StatusCode::CREATED, Json(RoomSnapshot::from(room))))
        }
        Err(GameError::RoomCodeExists(code)) => {
            tracing::warn!("Room code '{}' already exists. Rejecting creation.", code);
            Err(StatusCode::CONFLICT)
        }
        Err(e) => {
            tracing::error!("Failed to create room: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get list of rooms
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSnapshot>> {
    let game = state.game.lock().await;
    let snapshots = game.rooms.list().into_iter().map(RoomSnapshot::from).collect();
    Json(snapshots)
}

/// Get room detail by code
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<RoomSnapshot>, StatusCode> {
    let game = state.game.lock().await;
    match game.rooms.get(&code) {
        Some(room) => Ok(Json(RoomSnapshot::from(room))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a room by code
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> StatusCode {
    let mut game = state.game.lock().await;
    if game.rooms.delete(&code) {
        tracing::info!("Room '{}' deleted", code);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Delete every room
pub async fn delete_all_rooms(State(state): State<Arc<AppState>>) -> StatusCode {
    let mut game = state.game.lock().await;
    game.rooms.clear();
    tracing::info!("All rooms deleted");
    StatusCode::NO_CONTENT
}
