//! Superficie de marcadores del mapa
//!
//! El motor de seguimiento dibuja sobre el mapa a través de este trait;
//! la implementación de producción publica comandos en el feed en vivo
//! para que el widget del dashboard los aplique.

use tokio::sync::broadcast;

use super::{FeedMessage, MarkerKind};
use crate::models::Position;

/// Operaciones de dibujo que expone el widget del mapa
pub trait MarkerCanvas: Send + Sync {
    /// Crear un marcador para la ruta con el estilo indicado
    fn place_marker(&self, route_id: &str, kind: MarkerKind, position: Position, color: &str);

    /// Mover el marcador de posición actual de la ruta
    fn move_marker(&self, route_id: &str, position: Position);

    /// Eliminar todos los marcadores de la ruta
    fn clear_markers(&self, route_id: &str);
}

/// Canvas de producción: publica los comandos en el feed broadcast
#[derive(Debug, Clone)]
pub struct LiveFeedCanvas {
    sender: broadcast::Sender<FeedMessage>,
}

impl LiveFeedCanvas {
    pub fn new(sender: broadcast::Sender<FeedMessage>) -> Self {
        Self { sender }
    }
}

impl MarkerCanvas for LiveFeedCanvas {
    fn place_marker(&self, route_id: &str, kind: MarkerKind, position: Position, color: &str) {
        // send() falla solo cuando no hay clientes conectados
        let _ = self.sender.send(FeedMessage::MarkerPlaced {
            route_id: route_id.to_string(),
            kind,
            position,
            color: color.to_string(),
        });
    }

    fn move_marker(&self, route_id: &str, position: Position) {
        let _ = self.sender.send(FeedMessage::MarkerMoved {
            route_id: route_id.to_string(),
            position,
        });
    }

    fn clear_markers(&self, route_id: &str) {
        let _ = self.sender.send(FeedMessage::MarkerCleared {
            route_id: route_id.to_string(),
        });
    }
}
