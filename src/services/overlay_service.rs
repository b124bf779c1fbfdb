//! Gestión de overlays del mapa
//!
//! Este módulo es el único dueño del estado visual del mapa: crea,
//! mueve y destruye los marcadores de cada ruta seguida a través del
//! trait MarkerCanvas, y garantiza un overlay como máximo por ruta.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::feed::{MarkerCanvas, MarkerKind};
use crate::models::Position;
use crate::utils::errors::{route_already_tracked_error, AppResult};

/// Estado visual de una ruta activamente seguida
#[derive(Debug, Clone)]
pub struct RouteOverlay {
    pub route_id: String,
    pub color: String,
    pub current_position: Position,
    pub destination_position: Position,
}

/// Administrador de overlays de ruta
#[derive(Clone)]
pub struct OverlayService {
    overlays: Arc<RwLock<HashMap<String, RouteOverlay>>>,
    canvas: Arc<dyn MarkerCanvas>,
}

impl OverlayService {
    pub fn new(canvas: Arc<dyn MarkerCanvas>) -> Self {
        Self {
            overlays: Arc::new(RwLock::new(HashMap::new())),
            canvas,
        }
    }

    /// Registrar el overlay de una ruta y dibujar sus dos marcadores
    pub async fn add(
        &self,
        route_id: &str,
        current_position: Position,
        destination_position: Position,
        color: &str,
    ) -> AppResult<RouteOverlay> {
        let mut overlays = self.overlays.write().await;

        if overlays.contains_key(route_id) {
            return Err(route_already_tracked_error(route_id));
        }

        self.canvas
            .place_marker(route_id, MarkerKind::Current, current_position, color);
        self.canvas
            .place_marker(route_id, MarkerKind::Destination, destination_position, color);

        let overlay = RouteOverlay {
            route_id: route_id.to_string(),
            color: color.to_string(),
            current_position,
            destination_position,
        };
        overlays.insert(route_id.to_string(), overlay.clone());

        tracing::debug!("🗺️ Overlay creado para la ruta {}", route_id);
        Ok(overlay)
    }

    /// Mover el marcador de posición actual; no-op si la ruta no tiene overlay
    pub async fn move_marker(&self, route_id: &str, new_position: Position) {
        let mut overlays = self.overlays.write().await;

        if let Some(overlay) = overlays.get_mut(route_id) {
            overlay.current_position = new_position;
            self.canvas.move_marker(route_id, new_position);
        }
    }

    /// Destruir los marcadores de la ruta y soltar el overlay; no-op si no existe
    pub async fn remove(&self, route_id: &str) {
        let mut overlays = self.overlays.write().await;

        if overlays.remove(route_id).is_some() {
            self.canvas.clear_markers(route_id);
            tracing::debug!("🧹 Overlay eliminado para la ruta {}", route_id);
        }
    }

    pub async fn get(&self, route_id: &str) -> Option<RouteOverlay> {
        let overlays = self.overlays.read().await;
        overlays.get(route_id).cloned()
    }

    pub async fn list(&self) -> Vec<RouteOverlay> {
        let overlays = self.overlays.read().await;
        overlays.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        let overlays = self.overlays.read().await;
        overlays.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
