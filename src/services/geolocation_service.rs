use serde::Deserialize;

use crate::models::Position;

#[derive(Debug, Deserialize)]
struct GeoLookupResponse {
    lat: f64,
    #[serde(alias = "lon")]
    lng: f64,
}

/// Resolución del centro inicial del mapa
pub struct GeolocationService {
    lookup_url: Option<String>,
    fallback: Position,
    client: reqwest::Client,
}

impl GeolocationService {
    pub fn new(lookup_url: Option<String>, fallback: Position) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            lookup_url,
            fallback,
            client,
        }
    }

    /// Resolver el centro del mapa; cualquier fallo cae al centro configurado
    pub async fn resolve_center(&self) -> Position {
        let url = match &self.lookup_url {
            Some(url) => url,
            None => {
                log::info!("🧭 No geolocation service configured, using default center");
                return self.fallback;
            }
        };

        log::info!("🧭 Resolving map center from: {}", url);

        match self.lookup(url).await {
            Ok(center) => {
                log::info!("✅ Map center resolved: ({}, {})", center.lat, center.lng);
                center
            }
            Err(e) => {
                log::warn!("⚠️ Geolocation lookup failed, using default center: {}", e);
                self.fallback
            }
        }
    }

    async fn lookup(&self, url: &str) -> anyhow::Result<Position> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", "DeliveryTracking/1.0")
            .send()
            .await?
            .error_for_status()?;

        let geo: GeoLookupResponse = response.json().await?;
        Ok(Position::new(geo.lat, geo.lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_center_without_lookup_url() {
        let fallback = Position::new(-23.563099, -46.654279);
        let service = GeolocationService::new(None, fallback);

        assert_eq!(service.resolve_center().await, fallback);
    }

    #[test]
    fn test_lookup_response_accepts_lng_and_lon() {
        let with_lng: GeoLookupResponse =
            serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).unwrap();
        let with_lon: GeoLookupResponse =
            serde_json::from_str(r#"{"lat": 1.5, "lon": 2.5}"#).unwrap();

        assert_eq!(with_lng.lng, 2.5);
        assert_eq!(with_lon.lng, 2.5);
    }
}
