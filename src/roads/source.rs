use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::{config::RoadQueryConfig, geo::LatLng};
use crate::data::overpass::{highway_query, parse_roads};
use crate::layers::road::RoadSegment;
use crate::{MapError, Result};

/// Shared async HTTP client. Public Overpass instances throttle anonymous
/// clients harder, so identify ourselves.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("roadview/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
});

/// Something that can answer "which roads are near here"
#[async_trait]
pub trait RoadSource: Send + Sync {
    async fn fetch_roads(&self, center: LatLng, radius_m: f64) -> Result<Vec<RoadSegment>>;
}

/// Road source backed by an Overpass API interpreter endpoint
#[derive(Debug, Clone)]
pub struct OverpassSource {
    endpoint: String,
    timeout: std::time::Duration,
}

impl OverpassSource {
    pub fn new(endpoint: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config(config: &RoadQueryConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RoadSource for OverpassSource {
    async fn fetch_roads(&self, center: LatLng, radius_m: f64) -> Result<Vec<RoadSegment>> {
        let query = highway_query(center, radius_m);
        log::debug!("POST {} ({} byte query)", self.endpoint, query.len());

        let response = HTTP_CLIENT
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .timeout(self.timeout)
            .body(query)
            .send()
            .await
            .map_err(MapError::Network)?
            .error_for_status()
            .map_err(MapError::Network)?;

        let body = response.text().await.map_err(MapError::Network)?;
        parse_roads(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_config() {
        let config = RoadQueryConfig::default()
            .with_endpoint("http://localhost:12345/api/interpreter")
            .with_timeout(Duration::from_secs(5));
        let source = OverpassSource::from_config(&config);
        assert_eq!(source.endpoint(), "http://localhost:12345/api/interpreter");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast
        let source = OverpassSource::new("http://127.0.0.1:9/api/interpreter", Duration::from_secs(5));
        let result = source.fetch_roads(LatLng::new(48.8566, 2.3522), 100.0).await;
        assert!(result.is_err());
    }
}
