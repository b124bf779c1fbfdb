//! Motor de seguimiento de rutas
//!
//! Este módulo orquesta el ciclo de vida de cada ruta seguida: une el
//! catálogo, el canal de posiciones, los overlays del mapa y las
//! notificaciones en una sola máquina de estados por ruta.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::channel::RealtimeChannel;
use crate::feed::Notifier;
use crate::models::{PositionEvent, Route, TrackingState};
use crate::services::color_service::ColorAssigner;
use crate::services::overlay_service::{OverlayService, RouteOverlay};
use crate::utils::errors::{route_not_found_error, AppResult};

/// Gracia por defecto antes de limpiar una ruta terminada
pub const DEFAULT_GRACE_DELAY: Duration = Duration::from_secs(5);

/// Controlador del ciclo de vida de las rutas seguidas
#[derive(Clone)]
pub struct TrackingService {
    catalog: Arc<RwLock<Vec<Route>>>,
    lifecycle: Arc<RwLock<HashMap<String, TrackingState>>>,
    overlays: OverlayService,
    colors: Arc<dyn ColorAssigner>,
    notifier: Arc<dyn Notifier>,
    channel: Arc<dyn RealtimeChannel>,
    grace_delay: Duration,
}

impl TrackingService {
    pub fn new(
        overlays: OverlayService,
        colors: Arc<dyn ColorAssigner>,
        notifier: Arc<dyn Notifier>,
        channel: Arc<dyn RealtimeChannel>,
    ) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Vec::new())),
            lifecycle: Arc::new(RwLock::new(HashMap::new())),
            overlays,
            colors,
            notifier,
            channel,
            grace_delay: DEFAULT_GRACE_DELAY,
        }
    }

    pub fn with_grace_delay(mut self, grace_delay: Duration) -> Self {
        self.grace_delay = grace_delay;
        self
    }

    /// Poner una ruta del catálogo en seguimiento
    pub async fn start(&self, route_id: &str) -> AppResult<RouteOverlay> {
        let route = self
            .find_route(route_id)
            .await
            .ok_or_else(|| route_not_found_error(route_id))?;

        let color = self.colors.assign();

        // Orden fijo de locks para mutaciones compuestas: lifecycle → overlays
        let mut lifecycle = self.lifecycle.write().await;

        let overlay = match self
            .overlays
            .add(route_id, route.start_position, route.end_position, &color)
            .await
        {
            Ok(overlay) => overlay,
            Err(e) => {
                self.notifier.notify_error(&format!(
                    "{} ya está en seguimiento, espera a que termine",
                    route.title
                ));
                return Err(e);
            }
        };

        lifecycle.insert(route_id.to_string(), TrackingState::Active);
        drop(lifecycle);

        tracing::info!("🚦 Ruta {} en seguimiento con color {}", route.title, color);

        self.channel.begin_tracking(route_id).await?;
        Ok(overlay)
    }

    /// Aplicar un evento de posición entrante
    pub async fn handle_position_event(&self, event: &PositionEvent) {
        // El marcador se mueve siempre, también en el evento final
        self.overlays
            .move_marker(&event.route_id, event.coordinate())
            .await;

        if !event.finished {
            return;
        }

        // El catálogo pudo cambiar desde el inicio; el título cae a vacío
        let title = self
            .find_route(&event.route_id)
            .await
            .map(|route| route.title)
            .unwrap_or_default();

        let tracked = {
            let mut lifecycle = self.lifecycle.write().await;
            match lifecycle.get_mut(&event.route_id) {
                Some(state) => {
                    *state = TrackingState::Finished;
                    true
                }
                // Sin entrada de ciclo de vida el evento es inerte
                None => false,
            }
        };

        if tracked {
            tracing::info!("🏁 Ruta {} terminada", event.route_id);
            self.notifier
                .notify_success(&format!("¡{} finalizó la carrera!", title));
            self.schedule_cleanup(event.route_id.clone());
        }
    }

    /// Programar la limpieza diferida de una ruta terminada
    fn schedule_cleanup(&self, route_id: String) {
        let service = self.clone();

        // La gracia se ancla al momento de programar, no al primer poll de la tarea
        let grace = tokio::time::sleep(service.grace_delay);

        tokio::spawn(async move {
            grace.await;

            let mut lifecycle = service.lifecycle.write().await;
            lifecycle.remove(&route_id);
            drop(lifecycle);

            service.overlays.remove(&route_id).await;
            tracing::debug!("🧹 Ruta {} retirada tras la gracia", route_id);
        });
    }

    /// Reinstalar la suscripción al canal; el bucle anterior se desconecta
    pub async fn resubscribe(&self) {
        let mut receiver = self.channel.subscribe().await;
        let service = self.clone();

        tokio::spawn(async move {
            tracing::debug!("📻 Bucle de eventos de posición instalado");
            while let Some(event) = receiver.recv().await {
                service.handle_position_event(&event).await;
            }
            tracing::debug!("📴 Bucle de eventos de posición desconectado");
        });
    }

    /// Reemplazo completo del catálogo más resuscripción al canal
    pub async fn refresh_catalog(&self, routes: Vec<Route>) {
        self.channel.sync_routes(&routes).await;
        self.replace_catalog(routes).await;
        self.resubscribe().await;
    }

    pub async fn replace_catalog(&self, routes: Vec<Route>) {
        let mut catalog = self.catalog.write().await;
        *catalog = routes;
    }

    pub async fn catalog(&self) -> Vec<Route> {
        let catalog = self.catalog.read().await;
        catalog.clone()
    }

    pub async fn find_route(&self, route_id: &str) -> Option<Route> {
        let catalog = self.catalog.read().await;
        catalog.iter().find(|route| route.id == route_id).cloned()
    }

    pub async fn lifecycle_state(&self, route_id: &str) -> Option<TrackingState> {
        let lifecycle = self.lifecycle.read().await;
        lifecycle.get(route_id).copied()
    }

    pub fn overlays(&self) -> &OverlayService {
        &self.overlays
    }
}
