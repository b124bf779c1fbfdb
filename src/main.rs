use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use delivery_tracking::config::environment::EnvironmentConfig;
use delivery_tracking::feed::{feed_channel, FeedNotifier, LiveFeedCanvas};
use delivery_tracking::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use delivery_tracking::models::Position;
use delivery_tracking::routes::{feed_routes, tracking_routes};
use delivery_tracking::services::catalog_service::CatalogClient;
use delivery_tracking::services::color_service::PaletteColorAssigner;
use delivery_tracking::services::geolocation_service::GeolocationService;
use delivery_tracking::services::overlay_service::OverlayService;
use delivery_tracking::services::simulator_service::SimulatorChannel;
use delivery_tracking::services::tracking_service::TrackingService;
use delivery_tracking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Delivery Tracking - Dashboard de seguimiento en vivo");
    info!("=======================================================");

    let config = EnvironmentConfig::default();

    // Catálogo upstream y centro inicial del mapa, en paralelo
    let catalog_client = CatalogClient::new(config.catalog_url.clone());
    let geolocation = GeolocationService::new(
        config.geolocation_url.clone(),
        Position::new(config.default_center_lat, config.default_center_lng),
    );

    let (catalog_result, map_center) =
        futures::join!(catalog_client.fetch_routes(), geolocation.resolve_center());

    let routes = match catalog_result {
        Ok(routes) => {
            info!("✅ Catálogo inicial: {} rutas", routes.len());
            routes
        }
        Err(e) => {
            error!("❌ Error descargando el catálogo: {}", e);
            return Err(anyhow::anyhow!("Error de catálogo: {}", e));
        }
    };

    // Feed en vivo + motor de seguimiento
    let feed = feed_channel();
    let canvas = Arc::new(LiveFeedCanvas::new(feed.clone()));
    let notifier = Arc::new(FeedNotifier::new(feed.clone()));
    let channel = Arc::new(SimulatorChannel::new(
        Duration::from_millis(config.simulator_tick_ms),
        config.simulator_paths_dir.clone(),
    ));

    let tracker = TrackingService::new(
        OverlayService::new(canvas),
        Arc::new(PaletteColorAssigner::default()),
        notifier,
        channel,
    )
    .with_grace_delay(Duration::from_secs(config.cleanup_grace_secs));

    tracker.refresh_catalog(routes).await;

    // CORS según configuración
    let cors = if config.cors_allow_any() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(
        config.clone(),
        tracker,
        catalog_client,
        feed,
        map_center,
    );

    let app = Router::new()
        .route("/test", get(test_endpoint))
        // Listado original del catálogo (mantener por compatibilidad)
        .route("/routes", get(tracking_routes::list_routes))
        // Rutas MVC
        .nest("/api/tracking", tracking_routes::create_tracking_router())
        .merge(feed_routes::create_feed_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("   GET  /routes - Catálogo (forma original del upstream)");
    info!("🛰️ Endpoints MVC - Tracking:");
    info!("   GET  /api/tracking/routes - Catálogo de rutas");
    info!("   POST /api/tracking/start - Iniciar seguimiento de una ruta");
    info!("   GET  /api/tracking/overlays - Overlays activos del mapa");
    info!("   POST /api/tracking/refresh - Refrescar catálogo y resuscribir");
    info!("📡 Endpoints del feed:");
    info!("   GET  /ws - Feed en vivo (WebSocket)");
    info!("   GET  /map/center - Centro inicial del mapa");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Delivery Tracking funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        }
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        }
    }
}
