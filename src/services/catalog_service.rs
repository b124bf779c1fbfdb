use anyhow::{anyhow, Result};

use crate::models::Route;

/// Cliente HTTP del catálogo de rutas upstream
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Descargar el snapshot completo del catálogo de rutas
    pub async fn fetch_routes(&self) -> Result<Vec<Route>> {
        let url = format!("{}/routes", self.base_url);
        log::info!("📚 Fetching route catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "DeliveryTracking/1.0")
            .send()
            .await?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Catalog fetch failed with status {}: {}", status, error_text);
            return Err(anyhow!("Catalog fetch failed: {}", status));
        }

        let routes: Vec<Route> = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse catalog response: {}", e))?;

        log::info!("✅ Catalog loaded: {} routes", routes.len());
        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_routes_against_live_catalog() {
        // Este test requiere un catálogo accesible
        let base_url = std::env::var("CATALOG_URL").unwrap_or_default();
        if base_url.is_empty() {
            println!("⚠️ Skipping test: CATALOG_URL not set");
            return;
        }

        let client = CatalogClient::new(base_url);
        let result = client.fetch_routes().await;

        match result {
            Ok(routes) => {
                println!("✅ Catalog result: {} routes", routes.len());
            }
            Err(e) => {
                println!("❌ Catalog error: {}", e);
            }
        }
    }
}
