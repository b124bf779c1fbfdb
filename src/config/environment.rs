//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // URL del catálogo de rutas upstream
    pub catalog_url: String,
    // URL opcional del servicio de geolocalización para centrar el mapa
    pub geolocation_url: Option<String>,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    // Ventana de gracia antes de limpiar una ruta terminada
    pub cleanup_grace_secs: u64,
    // Cadencia del simulador de posiciones
    pub simulator_tick_ms: u64,
    pub simulator_paths_dir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            catalog_url: env::var("CATALOG_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            geolocation_url: env::var("GEOLOCATION_URL").ok(),
            default_center_lat: env::var("DEFAULT_CENTER_LAT")
                .unwrap_or_else(|_| "-23.563099".to_string())
                .parse()
                .expect("DEFAULT_CENTER_LAT must be a valid number"),
            default_center_lng: env::var("DEFAULT_CENTER_LNG")
                .unwrap_or_else(|_| "-46.654279".to_string())
                .parse()
                .expect("DEFAULT_CENTER_LNG must be a valid number"),
            cleanup_grace_secs: env::var("CLEANUP_GRACE_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("CLEANUP_GRACE_SECS must be a valid number"),
            simulator_tick_ms: env::var("SIMULATOR_TICK_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("SIMULATOR_TICK_MS must be a valid number"),
            simulator_paths_dir: env::var("SIMULATOR_PATHS_DIR")
                .unwrap_or_else(|_| "destinations".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Verificar si CORS debe aceptar cualquier origen
    pub fn cors_allow_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
