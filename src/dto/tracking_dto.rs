use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Position;
use crate::services::overlay_service::RouteOverlay;

// Request para iniciar el seguimiento de una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct StartTrackingRequest {
    #[validate(length(min = 1, message = "route_id must not be empty"))]
    pub route_id: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

// Response de un overlay activo
#[derive(Debug, Serialize)]
pub struct OverlayResponse {
    pub route_id: String,
    pub color: String,
    pub current_position: Position,
    pub destination_position: Position,
}

impl From<RouteOverlay> for OverlayResponse {
    fn from(overlay: RouteOverlay) -> Self {
        Self {
            route_id: overlay.route_id,
            color: overlay.color,
            current_position: overlay.current_position,
            destination_position: overlay.destination_position,
        }
    }
}
