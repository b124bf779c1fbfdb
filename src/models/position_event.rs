//! Modelo de PositionEvent
//!
//! Mensaje de transporte del canal realtime: id de ruta, coordenada como
//! par `[lat, lng]` y bandera de finalización. Efímero; solo se consume.

use serde::{Deserialize, Serialize};

use super::route::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEvent {
    pub route_id: String,
    pub position: [f64; 2],
    pub finished: bool,
}

impl PositionEvent {
    pub fn new(route_id: impl Into<String>, lat: f64, lng: f64, finished: bool) -> Self {
        Self {
            route_id: route_id.into(),
            position: [lat, lng],
            finished,
        }
    }

    /// Coordenada del evento en el orden del wire: `[0]` latitud, `[1]` longitud
    pub fn coordinate(&self) -> Position {
        Position::new(self.position[0], self.position[1])
    }
}
