use validator::Validate;

use crate::dto::tracking_dto::{ApiResponse, OverlayResponse, StartTrackingRequest};
use crate::models::Route;
use crate::services::catalog_service::CatalogClient;
use crate::services::tracking_service::TrackingService;
use crate::utils::errors::{external_api_error, AppResult};

pub struct TrackingController {
    tracker: TrackingService,
    catalog_client: CatalogClient,
}

impl TrackingController {
    pub fn new(tracker: TrackingService, catalog_client: CatalogClient) -> Self {
        Self {
            tracker,
            catalog_client,
        }
    }

    /// Snapshot actual del catálogo de rutas
    pub async fn list_routes(&self) -> AppResult<Vec<Route>> {
        Ok(self.tracker.catalog().await)
    }

    /// Iniciar el seguimiento de una ruta seleccionada
    pub async fn start(
        &self,
        request: StartTrackingRequest,
    ) -> AppResult<ApiResponse<OverlayResponse>> {
        // Validar campos
        request.validate()?;

        let overlay = self.tracker.start(&request.route_id).await?;

        Ok(ApiResponse::success_with_message(
            OverlayResponse::from(overlay),
            "Route tracking started".to_string(),
        ))
    }

    /// Overlays activos sobre el mapa
    pub async fn list_overlays(&self) -> AppResult<Vec<OverlayResponse>> {
        let overlays = self.tracker.overlays().list().await;

        Ok(overlays.into_iter().map(OverlayResponse::from).collect())
    }

    /// Volver a descargar el catálogo y reinstalar la suscripción
    pub async fn refresh(&self) -> AppResult<ApiResponse<Vec<Route>>> {
        let routes = self
            .catalog_client
            .fetch_routes()
            .await
            .map_err(|e| external_api_error(&e.to_string()))?;

        self.tracker.refresh_catalog(routes.clone()).await;

        Ok(ApiResponse::success_with_message(
            routes,
            "Catalog refreshed successfully".to_string(),
        ))
    }
}
