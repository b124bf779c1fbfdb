//! Controladores de la API
//!
//! Este módulo contiene los controladores que median entre la capa HTTP
//! y los servicios del motor de seguimiento.

pub mod tracking_controller;

pub use tracking_controller::TrackingController;
