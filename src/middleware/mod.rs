//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y otras funcionalidades
//! transversales de la capa HTTP.

pub mod cors;

pub use cors::*;
