//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que comparten el catálogo
//! upstream, el canal de posiciones y el motor de seguimiento.

pub mod route;
pub mod position_event;

pub use route::{Position, Route, TrackingState};
pub use position_event::PositionEvent;
