//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan el motor de seguimiento, los overlays del mapa
//! y las integraciones externas (catálogo, geolocalización, simulador).

pub mod catalog_service;
pub mod color_service;
pub mod geolocation_service;
pub mod overlay_service;
pub mod simulator_service;
pub mod tracking_service;

pub use catalog_service::CatalogClient;
pub use color_service::{ColorAssigner, PaletteColorAssigner, DEFAULT_PALETTE};
pub use geolocation_service::GeolocationService;
pub use overlay_service::{OverlayService, RouteOverlay};
pub use simulator_service::{SimulatorChannel, SIMULATED_STEPS};
pub use tracking_service::{TrackingService, DEFAULT_GRACE_DELAY};
