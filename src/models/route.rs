//! Modelo de Route
//!
//! Este módulo contiene el struct Route tal como lo entrega el catálogo
//! upstream, junto con el tipo Position y el estado de seguimiento.

use serde::{Deserialize, Serialize};

/// Par (latitud, longitud) - tipo valor, sin identidad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Route principal - mapea exactamente al JSON del catálogo upstream
/// (campos `_id`, `title`, `startPosition`, `endPosition`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub start_position: Position,
    pub end_position: Position,
}

/// Estado de ciclo de vida de una ruta en seguimiento.
/// La ausencia de entrada en el mapa de estados representa `absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingState {
    Active,
    Finished,
}
