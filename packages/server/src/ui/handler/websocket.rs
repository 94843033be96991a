//! WebSocket connection handlers.
//!
//! Each upgraded socket is split in two tasks: a writer draining the
//! session's outbound lane onto the socket, and a reader feeding text frames
//! to the chat router. When either ends, the other is aborted and the
//! disconnect is reported.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ChatEvent, UserId},
    infrastructure::{dto::websocket::ChatEventDto, sink::ChannelSink},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let user_id = match UserId::try_from(name) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user_id)))
}

/// Drain `rx` onto the socket as JSON text frames.
///
/// Ends when the socket fails or the lane closes. The lane closes when the
/// registry drops this session, e.g. because the same user reconnected.
fn pusher_loop(
    mut rx: mpsc::Receiver<ChatEvent>,
    mut sender: SplitSink<WebSocket, Message>,
    user_id: UserId,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match serde_json::to_string(&ChatEventDto::from(&event)) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode event for '{}': {}", user_id, e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
        let _ = sender.close().await;
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, user_id: UserId) {
    let (sender, mut receiver) = socket.split();

    // The writer must be running before the join notice is queued to ourselves
    let (sink, rx) = ChannelSink::channel(state.outbound_buffer, state.send_timeout);
    let mut send_task = pusher_loop(rx, sender, user_id.clone());

    let session_id = match state.router.on_connect(user_id.as_str(), Arc::new(sink)).await {
        Ok(connected) => {
            tracing::info!("'{}' connected (session {})", user_id, connected.session_id);
            connected.session_id
        }
        Err(e) => {
            tracing::warn!("Failed to connect '{}': {}", user_id, e);
            send_task.abort();
            return;
        }
    };

    let router = state.router.clone();
    let reader_user_id = user_id.clone();

    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    router.on_error(reader_user_id.as_str(), &e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", reader_user_id, text.as_str());
                    // Keep the connection open on a bad frame
                    if let Err(e) = router.on_message(reader_user_id.as_str(), text.as_str()).await
                    {
                        tracing::warn!("Dropping message from '{}': {}", reader_user_id, e);
                    }
                }
                Message::Close(_) => {
                    tracing::info!("'{}' requested close", reader_user_id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match state.router.on_disconnect_session(&user_id, session_id).await {
        Some(report) => tracing::info!(
            "'{}' disconnected; notified {} sessions",
            user_id,
            report.delivered.len()
        ),
        None => tracing::info!(
            "Superseded session {} of '{}' closed; newer session kept",
            session_id,
            user_id
        ),
    }
}
