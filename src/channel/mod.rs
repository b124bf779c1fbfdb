//! Canal de posiciones en tiempo real
//!
//! Este módulo define la frontera con el transporte que entrega los
//! eventos de posición y acepta la señal de inicio de seguimiento.
//! La implementación de producción es el simulador de posiciones.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::models::{PositionEvent, Route};
use crate::utils::errors::AppResult;

/// Transporte de eventos de posición keyed por ruta
#[async_trait]
pub trait RealtimeChannel: Send + Sync {
    /// Pedir al canal que empiece a emitir posiciones para la ruta
    async fn begin_tracking(&self, route_id: &str) -> AppResult<()>;

    /// Instalar un suscriptor nuevo; el anterior queda desconectado
    async fn subscribe(&self) -> mpsc::UnboundedReceiver<PositionEvent>;

    /// Informar al canal del conjunto de rutas conocidas
    async fn sync_routes(&self, routes: &[Route]) {
        let _ = routes;
    }
}
