use axum::{
    extract::{State, ws::{Message, WebSocket, WebSocketUpgrade}},
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::time::{interval, Duration};
use crate::api::rest::AppState;

/// Push transport, mounted only when realtime is enabled in config.
/// Polling clients use the REST routes instead; the payloads are identical.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut ticker = interval(Duration::from_secs(state.realtime_interval_secs));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let candidates = state.screener.screen().await;

                let update = serde_json::json!({
                    "type": "phoenix_update",
                    "count": candidates.len(),
                    "data": candidates.as_ref(),
                });
                if sender.send(Message::Text(update.to_string())).await.is_err() {
                    break;
                }

                let alerts = super::rest::alerts_from(&candidates);
                if !alerts.is_empty() {
                    let msg = serde_json::json!({
                        "type": "alert",
                        "count": alerts.len(),
                        "data": alerts,
                    });
                    if sender.send(Message::Text(msg.to_string())).await.is_err() {
                        break;
                    }
                }
            }

            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Ok(cmd) = serde_json::from_str::<serde_json::Value>(&text) {
                            if cmd["type"] == "ping" {
                                let _ = sender.send(Message::Text(r#"{"type":"pong"}"#.to_string())).await;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }
}
