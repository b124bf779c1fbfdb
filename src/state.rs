//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use tokio::sync::broadcast;

use crate::config::environment::EnvironmentConfig;
use crate::feed::FeedMessage;
use crate::models::Position;
use crate::services::catalog_service::CatalogClient;
use crate::services::tracking_service::TrackingService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub tracker: TrackingService,
    pub catalog_client: CatalogClient,
    pub feed: broadcast::Sender<FeedMessage>,
    pub map_center: Position,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        tracker: TrackingService,
        catalog_client: CatalogClient,
        feed: broadcast::Sender<FeedMessage>,
        map_center: Position,
    ) -> Self {
        Self {
            config,
            tracker,
            catalog_client,
            feed,
            map_center,
        }
    }
}
