//! Simulador de posiciones
//!
//! Implementación de producción del canal en tiempo real: reproduce el
//! trayecto de cada ruta como una secuencia de eventos de posición con
//! una cadencia fija, marcando el último evento como terminado.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};

use crate::channel::RealtimeChannel;
use crate::models::{Position, PositionEvent, Route};
use crate::utils::errors::{channel_error, AppResult};

/// Puntos intermedios generados al interpolar un trayecto sin archivo
pub const SIMULATED_STEPS: usize = 10;

/// Canal simulado de posiciones en tiempo real
#[derive(Clone)]
pub struct SimulatorChannel {
    paths: Arc<RwLock<HashMap<String, Vec<Position>>>>,
    subscriber: Arc<RwLock<Option<mpsc::UnboundedSender<PositionEvent>>>>,
    tick: Duration,
    paths_dir: String,
}

impl SimulatorChannel {
    pub fn new(tick: Duration, paths_dir: String) -> Self {
        Self {
            paths: Arc::new(RwLock::new(HashMap::new())),
            subscriber: Arc::new(RwLock::new(None)),
            tick,
            paths_dir,
        }
    }

    /// Cargar el trayecto de una ruta: archivo `{dir}/{id}.txt` si existe,
    /// interpolación recta entre inicio y fin si no
    async fn load_path(&self, route: &Route) -> Vec<Position> {
        let file = format!("{}/{}.txt", self.paths_dir, route.id);

        match tokio::fs::read_to_string(&file).await {
            Ok(content) => {
                let points = parse_path(&content);
                if points.len() >= 2 {
                    log::debug!(
                        "🗂️ Trayecto de la ruta {} cargado desde {} ({} puntos)",
                        route.id,
                        file,
                        points.len()
                    );
                    return points;
                }

                log::warn!(
                    "⚠️ Archivo de trayecto inválido para la ruta {}, interpolando",
                    route.id
                );
                interpolate(route.start_position, route.end_position)
            }
            Err(_) => interpolate(route.start_position, route.end_position),
        }
    }

    async fn emit_path(&self, route_id: String, path: Vec<Position>) {
        let last = path.len().saturating_sub(1);

        for (index, position) in path.into_iter().enumerate() {
            let event =
                PositionEvent::new(route_id.clone(), position.lat, position.lng, index == last);

            let delivered = {
                let subscriber = self.subscriber.read().await;
                match subscriber.as_ref() {
                    Some(sender) => sender.send(event).is_ok(),
                    None => false,
                }
            };

            if !delivered {
                log::debug!("📴 Sin suscriptor, posición de la ruta {} descartada", route_id);
            }

            tokio::time::sleep(self.tick).await;
        }

        log::info!("🏁 La ruta {} terminó su emisión simulada", route_id);
    }
}

#[async_trait]
impl RealtimeChannel for SimulatorChannel {
    async fn begin_tracking(&self, route_id: &str) -> AppResult<()> {
        let path = {
            let paths = self.paths.read().await;
            paths.get(route_id).cloned()
        };

        let path = path.ok_or_else(|| {
            channel_error(&format!("No simulated path for route '{}'", route_id))
        })?;

        log::info!(
            "📡 Emitiendo {} posiciones para la ruta {}",
            path.len(),
            route_id
        );

        let channel = self.clone();
        let route_id = route_id.to_string();
        tokio::spawn(async move {
            channel.emit_path(route_id, path).await;
        });

        Ok(())
    }

    async fn subscribe(&self) -> mpsc::UnboundedReceiver<PositionEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Reemplazar el sender anterior lo cierra: el suscriptor viejo
        // deja de recibir eventos
        let mut subscriber = self.subscriber.write().await;
        *subscriber = Some(sender);

        receiver
    }

    async fn sync_routes(&self, routes: &[Route]) {
        let mut loaded = HashMap::new();
        for route in routes {
            loaded.insert(route.id.clone(), self.load_path(route).await);
        }

        let mut paths = self.paths.write().await;
        *paths = loaded;
        log::info!("🗺️ Trayectos simulados listos para {} rutas", paths.len());
    }
}

fn parse_path(content: &str) -> Vec<Position> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            let mut parts = line.split(',');
            let lat = parts.next()?.trim().parse().ok()?;
            let lng = parts.next()?.trim().parse().ok()?;
            Some(Position::new(lat, lng))
        })
        .collect()
}

fn interpolate(start: Position, end: Position) -> Vec<Position> {
    let total = SIMULATED_STEPS + 1;

    (0..=total)
        .map(|i| {
            let t = i as f64 / total as f64;
            Position::new(
                start.lat + (end.lat - start.lat) * t,
                start.lng + (end.lng - start.lng) * t,
            )
        })
        .collect()
}
