//! DTOs de la API
//!
//! Este módulo contiene los tipos de request y response que cruzan
//! la frontera HTTP del dashboard.

pub mod tracking_dto;

pub use tracking_dto::*;
