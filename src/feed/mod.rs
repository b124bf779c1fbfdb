//! Feed en vivo del dashboard
//!
//! Este módulo define los mensajes que el motor de seguimiento publica
//! hacia los clientes del dashboard (comandos de marcadores y
//! notificaciones), junto con el canal broadcast que los transporta.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::models::Position;

pub mod canvas;
pub mod notifier;

pub use canvas::{LiveFeedCanvas, MarkerCanvas};
pub use notifier::{FeedNotifier, Notifier};

/// Capacidad del canal broadcast del feed
pub const FEED_CAPACITY: usize = 256;

/// Tipo de marcador sobre el mapa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Current,
    Destination,
}

/// Nivel de una notificación transitoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Mensaje publicado en el feed en vivo
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    MarkerPlaced {
        route_id: String,
        kind: MarkerKind,
        position: Position,
        color: String,
    },
    MarkerMoved {
        route_id: String,
        position: Position,
    },
    MarkerCleared {
        route_id: String,
    },
    Notification {
        level: NotificationLevel,
        message: String,
        at: DateTime<Utc>,
    },
}

/// Crear el canal broadcast del feed
pub fn feed_channel() -> broadcast::Sender<FeedMessage> {
    let (sender, _) = broadcast::channel(FEED_CAPACITY);
    sender
}
