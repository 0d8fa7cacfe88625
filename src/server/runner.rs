//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::websocket_handler,
    http::{create_room, delete_all_rooms, delete_room, get_room, health_check, list_rooms},
    signal::shutdown_signal,
    state::AppState,
};

/// Run the buzzer game server
///
/// # Arguments
///
/// * `state` - Shared application state (game state + clock)
/// * `host` - The host address to bind to (e.g., "127.0.0.1")
/// * `port` - The port number to bind to (e.g., 8080)
pub async fn run_server(
    state: Arc<AppState>,
    host: String,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket_handler))
        // HTTP endpoints
        .route("/api/health", get(health_check))
        .route(
            "/api/rooms",
            post(create_room).get(list_rooms).delete(delete_all_rooms),
        )
        .route("/api/rooms/{code}", get(get_room).delete(delete_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Buzzer game server listening on {}", listener.local_addr()?);
    tracing::info!("Connect to: ws://{}/ws", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown gracefully");

    // Set up graceful shutdown signal handler
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
