//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Route already tracked: {0}")]
    RouteAlreadyTracked(String),

    #[error("Channel error: {0}")]
    Channel(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::RouteNotFound(msg) => {
                eprintln!("Route not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("ROUTE_NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::RouteAlreadyTracked(msg) => {
                eprintln!("Route already tracked: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("ROUTE_ALREADY_TRACKED".to_string()),
                    },
                )
            }

            AppError::Channel(msg) => {
                eprintln!("Channel error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Channel Error".to_string(),
                        message: "An error occurred while communicating with the position channel"
                            .to_string(),
                        details: Some(json!({ "channel_error": msg })),
                        code: Some("CHANNEL_ERROR".to_string()),
                    },
                )
            }

            AppError::ExternalApi(msg) => {
                eprintln!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: "An error occurred while communicating with external service".to_string(),
                        details: Some(json!({ "external_api_error": msg })),
                        code: Some("EXTERNAL_API_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de ruta no encontrada
pub fn route_not_found_error(route_id: &str) -> AppError {
    AppError::RouteNotFound(format!("Route with id '{}' not found", route_id))
}

/// Función helper para crear errores de ruta duplicada
pub fn route_already_tracked_error(route_id: &str) -> AppError {
    AppError::RouteAlreadyTracked(format!(
        "Route with id '{}' is already being tracked",
        route_id
    ))
}

/// Función helper para crear errores del canal de posiciones
pub fn channel_error(message: &str) -> AppError {
    AppError::Channel(message.to_string())
}

/// Función helper para crear errores de API externa
pub fn external_api_error(message: &str) -> AppError {
    AppError::ExternalApi(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
