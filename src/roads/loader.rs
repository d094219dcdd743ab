use super::source::{OverpassSource, RoadSource};
use crate::core::{config::RoadQueryConfig, geo::LatLng};
use crate::layers::road::RoadSegment;
use crate::Result;

/// Fetches road geometry and keeps the last good result.
///
/// Failures never reach the caller of [`RoadLoader::load_roads`]: they are
/// logged and the previous list (empty before the first success) is returned,
/// so the overlay degrades to "no new roads" instead of breaking the viewer.
pub struct RoadLoader {
    source: Box<dyn RoadSource>,
    config: RoadQueryConfig,
    segments: Vec<RoadSegment>,
}

impl RoadLoader {
    pub fn new(source: impl RoadSource + 'static, config: RoadQueryConfig) -> Self {
        Self {
            source: Box::new(source),
            config,
            segments: Vec::new(),
        }
    }

    /// Loader talking to the Overpass endpoint named in `config`
    pub fn overpass(config: RoadQueryConfig) -> Self {
        Self::new(OverpassSource::from_config(&config), config)
    }

    /// Result of the last successful load
    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    /// One request, errors propagated
    pub async fn fetch_roads(&self, center: LatLng, radius_m: f64) -> Result<Vec<RoadSegment>> {
        self.source.fetch_roads(center, radius_m).await
    }

    /// One request; on failure logs and falls back to the previous list
    pub async fn load_roads(&mut self, center: LatLng, radius_m: f64) -> Vec<RoadSegment> {
        match self.fetch_roads(center, radius_m).await {
            Ok(segments) => {
                log::info!(
                    "fetched {} roads within {} m of ({}, {})",
                    segments.len(),
                    radius_m,
                    center.lat,
                    center.lng
                );
                self.segments = segments;
            }
            Err(e) => {
                log::error!("error fetching roads data: {}", e);
            }
        }
        self.segments.clone()
    }

    /// [`RoadLoader::load_roads`] with the configured center and radius
    pub async fn load_configured(&mut self) -> Vec<RoadSegment> {
        let (center, radius_m) = (self.config.center, self.config.radius_m);
        self.load_roads(center, radius_m).await
    }

    /// Runs the configured load once in the background and sends the result
    /// to `tx`. Does nothing when the trigger is not `OnStartup`.
    #[cfg(feature = "tokio-runtime")]
    pub fn spawn_startup_load(
        mut self,
        handle: &tokio::runtime::Handle,
        tx: crossbeam_channel::Sender<Vec<RoadSegment>>,
    ) -> Option<tokio::task::JoinHandle<()>> {
        if !self.config.loads_on_startup() {
            log::debug!("road load trigger is manual; skipping startup fetch");
            return None;
        }
        Some(handle.spawn(async move {
            let segments = self.load_configured().await;
            if tx.send(segments).is_err() {
                log::debug!("viewer closed before roads arrived");
            }
        }))
    }
}
