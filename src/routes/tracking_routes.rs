use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::tracking_controller::TrackingController;
use crate::dto::tracking_dto::{ApiResponse, OverlayResponse, StartTrackingRequest};
use crate::models::Route;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tracking_router() -> Router<AppState> {
    Router::new()
        .route("/routes", get(list_tracking_routes))
        .route("/start", post(start_tracking))
        .route("/overlays", get(list_overlays))
        .route("/refresh", post(refresh_catalog))
}

fn controller(state: &AppState) -> TrackingController {
    TrackingController::new(state.tracker.clone(), state.catalog_client.clone())
}

/// Listado plano del catálogo, con la forma original del upstream
pub async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let response = controller(&state).list_routes().await?;
    Ok(Json(response))
}

async fn list_tracking_routes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Route>>>, AppError> {
    let response = controller(&state).list_routes().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn start_tracking(
    State(state): State<AppState>,
    Json(request): Json<StartTrackingRequest>,
) -> Result<Json<ApiResponse<OverlayResponse>>, AppError> {
    let response = controller(&state).start(request).await?;
    Ok(Json(response))
}

async fn list_overlays(
    State(state): State<AppState>,
) -> Result<Json<Vec<OverlayResponse>>, AppError> {
    let response = controller(&state).list_overlays().await?;
    Ok(Json(response))
}

async fn refresh_catalog(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Route>>>, AppError> {
    let response = controller(&state).refresh().await?;
    Ok(Json(response))
}
