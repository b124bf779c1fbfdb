use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::sync::{mpsc, RwLock};
use tower::ServiceExt;

use delivery_tracking::channel::RealtimeChannel;
use delivery_tracking::config::environment::EnvironmentConfig;
use delivery_tracking::feed::{feed_channel, FeedNotifier, LiveFeedCanvas};
use delivery_tracking::models::{Position, PositionEvent, Route};
use delivery_tracking::routes::{feed_routes, tracking_routes};
use delivery_tracking::services::catalog_service::CatalogClient;
use delivery_tracking::services::color_service::PaletteColorAssigner;
use delivery_tracking::services::overlay_service::OverlayService;
use delivery_tracking::services::tracking_service::TrackingService;
use delivery_tracking::state::AppState;
use delivery_tracking::utils::errors::AppResult;

#[derive(Default)]
struct StubChannel {
    begun: Mutex<Vec<String>>,
    subscriber: RwLock<Option<mpsc::UnboundedSender<PositionEvent>>>,
}

#[async_trait]
impl RealtimeChannel for StubChannel {
    async fn begin_tracking(&self, route_id: &str) -> AppResult<()> {
        self.begun.lock().unwrap().push(route_id.to_string());
        Ok(())
    }

    async fn subscribe(&self) -> mpsc::UnboundedReceiver<PositionEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut subscriber = self.subscriber.write().await;
        *subscriber = Some(sender);
        receiver
    }
}

fn fixture_route(id: &str, title: &str, start: (f64, f64), end: (f64, f64)) -> Route {
    Route {
        id: id.to_string(),
        title: title.to_string(),
        start_position: Position::new(start.0, start.1),
        end_position: Position::new(end.0, end.1),
    }
}

// Función helper para crear la app de test
async fn create_test_app() -> (Router, Arc<StubChannel>) {
    let feed = feed_channel();
    let canvas = Arc::new(LiveFeedCanvas::new(feed.clone()));
    let notifier = Arc::new(FeedNotifier::new(feed.clone()));
    let channel = Arc::new(StubChannel::default());

    let tracker = TrackingService::new(
        OverlayService::new(canvas),
        Arc::new(PaletteColorAssigner::default()),
        notifier,
        channel.clone(),
    );
    tracker
        .replace_catalog(vec![
            fixture_route("r1", "Run A", (0.0, 0.0), (1.0, 1.0)),
            fixture_route("r2", "Run B", (2.0, 2.0), (3.0, 3.0)),
        ])
        .await;

    // El upstream apunta a un puerto sin servicio para los tests de refresh
    let catalog_client = CatalogClient::new("http://127.0.0.1:9".to_string());

    let state = AppState::new(
        EnvironmentConfig::default(),
        tracker,
        catalog_client,
        feed,
        Position::new(-23.563099, -46.654279),
    );

    let app = Router::new()
        .route("/routes", get(tracking_routes::list_routes))
        .nest("/api/tracking", tracking_routes::create_tracking_router())
        .merge(feed_routes::create_feed_router())
        .with_state(state);

    (app, channel)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_list_routes_keeps_original_catalog_shape() {
    let (app, _) = create_test_app().await;

    let response = app.oneshot(get_request("/routes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["_id"], "r1");
    assert_eq!(body[0]["title"], "Run A");
    assert_eq!(body[0]["startPosition"]["lat"], 0.0);
    assert_eq!(body[0]["endPosition"]["lng"], 1.0);
}

#[tokio::test]
async fn test_tracking_routes_use_response_envelope() {
    let (app, _) = create_test_app().await;

    let response = app.oneshot(get_request("/api/tracking/routes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_start_tracking_returns_overlay_snapshot() {
    let (app, channel) = create_test_app().await;

    let response = app
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "r1" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["route_id"], "r1");
    assert_eq!(body["data"]["current_position"]["lat"], 0.0);
    assert_eq!(body["data"]["destination_position"]["lat"], 1.0);
    assert!(body["data"]["color"].as_str().unwrap().starts_with('#'));

    assert_eq!(*channel.begun.lock().unwrap(), vec!["r1".to_string()]);
}

#[tokio::test]
async fn test_start_tracking_unknown_route_returns_not_found() {
    let (app, _) = create_test_app().await;

    let response = app
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "ghost" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    assert_eq!(body["message"], "Route with id 'ghost' not found");
}

#[tokio::test]
async fn test_start_tracking_twice_returns_conflict() {
    let (app, _) = create_test_app().await;

    let first = app
        .clone()
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "r1" })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "r1" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = body_json(second).await;
    assert_eq!(body["code"], "ROUTE_ALREADY_TRACKED");
}

#[tokio::test]
async fn test_start_tracking_empty_route_id_fails_validation() {
    let (app, _) = create_test_app().await;

    let response = app
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_start_tracking_malformed_body_is_not_a_server_error() {
    let (app, _) = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tracking/start")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Debería fallar pero no dar error 500
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_overlays_snapshot_after_start() {
    let (app, _) = create_test_app().await;

    app.clone()
        .oneshot(post_json("/api/tracking/start", &json!({ "route_id": "r2" })))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/tracking/overlays")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let overlays = body.as_array().unwrap();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0]["route_id"], "r2");
    assert_eq!(overlays[0]["current_position"]["lat"], 2.0);
}

#[tokio::test]
async fn test_refresh_with_unreachable_catalog_returns_bad_gateway() {
    let (app, _) = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tracking/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "EXTERNAL_API_ERROR");
}

#[tokio::test]
async fn test_map_center_returns_configured_position() {
    let (app, _) = create_test_app().await;

    let response = app.oneshot(get_request("/map/center")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["lat"], -23.563099);
    assert_eq!(body["lng"], -46.654279);
}
