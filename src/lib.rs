//! Delivery Tracking - seguimiento en vivo de rutas de entrega
//!
//! Motor de seguimiento que une el catálogo de rutas upstream, el canal
//! de posiciones en tiempo real y los overlays del mapa del dashboard.

pub mod channel;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod feed;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
