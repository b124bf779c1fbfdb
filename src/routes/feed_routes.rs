use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
    routing::get,
    Json, Router,
};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::models::Position;
use crate::state::AppState;

pub fn create_feed_router() -> Router<AppState> {
    Router::new()
        .route("/ws", get(feed_handler))
        .route("/map/center", get(map_center))
}

async fn feed_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let mut feed = state.feed.subscribe();

    tracing::info!("🔌 Cliente {} conectado al feed en vivo", client_id);

    loop {
        tokio::select! {
            message = feed.recv() => {
                match message {
                    Ok(message) => {
                        let payload = match serde_json::to_string(&message) {
                            Ok(payload) => payload,
                            Err(e) => {
                                tracing::warn!("⚠️ Mensaje del feed no serializable: {}", e);
                                continue;
                            }
                        };

                        if socket.send(Message::Text(payload)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "⚠️ Cliente {} se atrasó {} mensajes del feed",
                            client_id,
                            skipped
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            incoming = socket.recv() => {
                match incoming {
                    // El dashboard no envía comandos por el socket todavía
                    Some(Ok(_)) => {}
                    _ => break,
                }
            }
        }
    }

    tracing::info!("🔌 Cliente {} desconectado del feed", client_id);
}

/// Centro inicial del mapa resuelto al arrancar
async fn map_center(State(state): State<AppState>) -> Json<Position> {
    Json(state.map_center)
}
