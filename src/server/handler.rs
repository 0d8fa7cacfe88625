//! WebSocket connection handlers and protocol dispatch.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::GameError;
use crate::registry::ConnId;

use super::{
    protocol::{ClientMsg, RoomSnapshot, ServerMsg, decode_client_msg},
    state::{AppState, GameState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes
/// them to the WebSocket sender.
///
/// All outbound traffic for one connection (broadcasts and private error
/// replies) flows through this single channel.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let conn_id: ConnId = Uuid::new_v4();
    let (tx, rx) = mpsc::unbounded_channel();

    {
        let mut game = state.game.lock().await;
        game.connections.register(conn_id, tx);
    }
    tracing::info!("Connection '{}' opened", conn_id);

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();

    // Receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", conn_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match decode_client_msg(&text) {
                    Ok(msg) => handle_client_msg(&state_clone, conn_id, msg).await,
                    Err(err) => {
                        tracing::warn!("Undecodable message on '{}': {}", conn_id, err);
                        let game = state_clone.game.lock().await;
                        send_to(&game, conn_id, &ServerMsg::from_error(&err));
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", conn_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    handle_disconnect(&state, conn_id).await;
}

/// Dispatch one decoded inbound message.
///
/// Each arm applies exactly one room transition under the game lock;
/// failures turn into a private `ERROR` reply to the originating
/// connection and never reach the rest of the room.
pub async fn handle_client_msg(state: &AppState, conn_id: ConnId, msg: ClientMsg) {
    let mut game = state.game.lock().await;

    let result = match msg {
        ClientMsg::Join {
            room_code,
            player_id,
            player_name,
        } => join(&mut game, conn_id, room_code, player_id, player_name),
        ClientMsg::EnableBuzz {
            room_code,
            player_id,
        } => enable_buzz(&mut game, &room_code, &player_id),
        ClientMsg::ResetBuzz {
            room_code,
            player_id,
        } => reset_buzz(&mut game, &room_code, &player_id),
        ClientMsg::Buzz {
            room_code,
            player_id,
        } => buzz(&mut game, &room_code, &player_id, state.clock.now_millis()),
        ClientMsg::Unknown => {
            tracing::debug!("Ignoring unknown message kind from '{}'", conn_id);
            return;
        }
    };

    if let Err(err) = result {
        tracing::warn!("Rejected message from '{}': {}", conn_id, err);
        send_to(&game, conn_id, &ServerMsg::from_error(&err));
    }
}

/// Connection close: remove the binding, take the participant out of the
/// room and broadcast the new state. Stale buzz entries and the admin id
/// stay as they are.
pub async fn handle_disconnect(state: &AppState, conn_id: ConnId) {
    let mut game = state.game.lock().await;

    let Some(binding) = game.connections.unregister(conn_id) else {
        tracing::info!("Connection '{}' closed before joining a room", conn_id);
        return;
    };

    tracing::info!(
        "Player '{}' left room '{}' (connection '{}' closed)",
        binding.player_id,
        binding.room_code,
        conn_id
    );

    if let Some(room) = game.rooms.get_mut(&binding.room_code) {
        room.remove_player(&binding.player_id);
        let reply = ServerMsg::State {
            room_code: room.code.clone(),
            details: RoomSnapshot::from(&*room),
        };
        broadcast(&game, &binding.room_code, &reply);
    }
}

fn join(
    game: &mut GameState,
    conn_id: ConnId,
    room_code: String,
    player_id: String,
    player_name: String,
) -> Result<(), GameError> {
    // Validate before any mutation: no binding is created for a missing room
    let room = game
        .rooms
        .get_mut(&room_code)
        .ok_or(GameError::RoomNotFound)?;
    room.join(player_id.clone(), player_name);

    let reply = ServerMsg::State {
        room_code: room.code.clone(),
        details: RoomSnapshot::from(&*room),
    };
    game.connections.bind(conn_id, room_code.clone(), player_id);
    broadcast(game, &room_code, &reply);
    Ok(())
}

fn enable_buzz(game: &mut GameState, room_code: &str, player_id: &str) -> Result<(), GameError> {
    let room = game
        .rooms
        .get_mut(room_code)
        .ok_or(GameError::RoomNotFound)?;
    room.enable_buzz(player_id)?;

    let reply = ServerMsg::BuzzEnabled {
        room_code: room.code.clone(),
        details: RoomSnapshot::from(&*room),
    };
    broadcast(game, room_code, &reply);
    Ok(())
}

fn reset_buzz(game: &mut GameState, room_code: &str, player_id: &str) -> Result<(), GameError> {
    let room = game
        .rooms
        .get_mut(room_code)
        .ok_or(GameError::RoomNotFound)?;
    room.reset_buzz(player_id)?;

    let reply = ServerMsg::BuzzReset {
        room_code: room.code.clone(),
        details: RoomSnapshot::from(&*room),
    };
    broadcast(game, room_code, &reply);
    Ok(())
}

fn buzz(
    game: &mut GameState,
    room_code: &str,
    player_id: &str,
    timestamp: i64,
) -> Result<(), GameError> {
    let room = game
        .rooms
        .get_mut(room_code)
        .ok_or(GameError::RoomNotFound)?;
    room.buzz(player_id, timestamp)?;

    let reply = ServerMsg::BuzzUpdate {
        room_code: room.code.clone(),
        details: RoomSnapshot::from(&*room),
    };
    broadcast(game, room_code, &reply);
    Ok(())
}

/// Deliver a message to every connection bound to the room.
///
/// Fire-and-forget per connection: a failed send is logged and skipped so
/// one closing connection never blocks delivery to the others.
fn broadcast(game: &GameState, room_code: &str, msg: &ServerMsg) {
    let payload = serde_json::to_string(msg).unwrap();
    for sender in game.connections.senders_for_room(room_code) {
        if sender.send(payload.clone()).is_err() {
            tracing::warn!("Failed to push message to a connection in room '{}'", room_code);
        }
    }
}

/// Send a message to a single connection (private replies).
fn send_to(game: &GameState, conn_id: ConnId, msg: &ServerMsg) {
    let payload = serde_json::to_string(msg).unwrap();
    match game.connections.sender_of(conn_id) {
        Some(sender) => {
            if sender.send(payload).is_err() {
                tracing::warn!("Failed to push reply to connection '{}'", conn_id);
            }
        }
        None => tracing::warn!("Connection '{}' not found for private reply", conn_id),
    }
}
