use super::state::AppState;
use crate::events::{ClientEvent, ServerEvent};
use crate::summary::store_room_summary;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// GET /ws
/// Upgrade to the realtime event surface
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// One task per connection: registers the participant, pumps events both
/// ways, and drives room teardown when its departure empties a room.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let peer_id = format!("peer-{}", uuid::Uuid::new_v4());
    let (mut sink, mut stream) = socket.split();

    let (tx, mut rx) = mpsc::unbounded_channel();
    state.registry.register(&peer_id, tx).await;

    // Writer task: drain the outbound channel into the socket
    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let frame = match serde_json::to_string(&event) {
                Ok(json) => Message::Text(json),
                Err(e) => {
                    warn!("Failed to encode outbound event: {}", e);
                    continue;
                }
            };
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(event) => dispatch(&state, &peer_id, event).await,
                Err(e) => warn!("Ignoring malformed event from {}: {}", peer_id, e),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    writer.abort();

    if let Some(room) = state.registry.disconnect(&peer_id).await {
        spawn_teardown(&state, room).await;
    }
}

/// Teardown for an emptied room: snapshot the transcript now, then let a
/// detached task own the snapshot through summarization and storage. The
/// task never blocks this connection's shutdown or any other participant's
/// events, and a room reopened under the same code starts clean.
async fn spawn_teardown(state: &AppState, room: String) {
    match state.transcripts.snapshot_and_clear(&room).await {
        Some(transcript) => {
            let summarizer = state.summarizer.clone();
            let store = state.summaries.clone();
            tokio::spawn(async move {
                store_room_summary(summarizer.as_ref(), &store, &room, &transcript).await;
            });
        }
        None => info!("No text recorded for room {}", room),
    }
}

async fn dispatch(state: &AppState, peer_id: &str, event: ClientEvent) {
    match event {
        ClientEvent::JoinRoom { room } => {
            state.registry.join(&room, peer_id).await;
        }
        ClientEvent::Signal { to, signal } => {
            state.registry.relay(peer_id, &to, signal).await;
        }
        ClientEvent::RecognizedText { room, text } => {
            info!("Received text for room {} from {}", room, peer_id);
            state
                .registry
                .broadcast_from(
                    &room,
                    peer_id,
                    ServerEvent::NewMessage {
                        from: peer_id.to_string(),
                        text: text.clone(),
                    },
                )
                .await;
            state.transcripts.append(&room, peer_id, &text).await;
        }
        ClientEvent::GetSummary { room } => {
            info!("Summary requested for room {}", room);
            let summary_text = state.summaries.get(&room).await;
            state
                .registry
                .send_to(
                    peer_id,
                    ServerEvent::SummaryReceived {
                        room_code: room,
                        summary_text,
                    },
                )
                .await;
        }
    }
}
