//! Configuration for the viewer and its road query
//!
//! Query center, radius, endpoint, attribution and icon geometry live here
//! with the Paris viewer values as defaults, so the loader and widget can be
//! pointed elsewhere without code changes.

use std::time::Duration;

use crate::core::{constants, geo::LatLng};
use crate::layers::road::LineStyle;

/// When the road query should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadTrigger {
    /// Fire once as soon as the viewer starts
    #[default]
    OnStartup,
    /// Only when the host calls the loader explicitly
    Manual,
}

/// Parameters of the Overpass road query
#[derive(Debug, Clone, PartialEq)]
pub struct RoadQueryConfig {
    pub endpoint: String,
    pub center: LatLng,
    pub radius_m: f64,
    pub trigger: LoadTrigger,
    pub timeout: Duration,
}

impl RoadQueryConfig {
    pub fn new(center: LatLng, radius_m: f64) -> Self {
        Self {
            center,
            radius_m,
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_trigger(mut self, trigger: LoadTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overpass QL text for this query
    pub fn query(&self) -> String {
        crate::data::overpass::highway_query(self.center, self.radius_m)
    }

    pub fn loads_on_startup(&self) -> bool {
        self.trigger == LoadTrigger::OnStartup
    }
}

impl Default for RoadQueryConfig {
    fn default() -> Self {
        let (lat, lng) = constants::DEFAULT_ROAD_CENTER;
        Self {
            endpoint: constants::DEFAULT_OVERPASS_URL.to_string(),
            center: LatLng::new(lat, lng),
            radius_m: constants::DEFAULT_ROAD_RADIUS_M,
            trigger: LoadTrigger::OnStartup,
            timeout: Duration::from_secs(constants::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Marker icon geometry, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub size: (u32, u32),
    /// Point of the icon that sits on the marker's coordinate
    pub anchor: (u32, u32),
    /// Where popups open, relative to the anchor
    pub popup_anchor: (i32, i32),
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: constants::MARKER_ICON_SIZE,
            anchor: constants::MARKER_ICON_ANCHOR,
            popup_anchor: constants::MARKER_POPUP_ANCHOR,
        }
    }
}

/// Top-level viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub attribution: String,
    pub icon: IconConfig,
    pub road_style: LineStyle,
    pub roads: RoadQueryConfig,
}

impl ViewerConfig {
    /// The central Paris view with the Eiffel Tower road query
    pub fn paris() -> Self {
        Self::default()
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let (lat, lng) = constants::DEFAULT_VIEW_CENTER;
        Self {
            center: LatLng::new(lat, lng),
            zoom: constants::DEFAULT_VIEW_ZOOM,
            min_zoom: 1.0,
            max_zoom: 18.0,
            attribution: constants::DEFAULT_ATTRIBUTION.to_string(),
            icon: IconConfig::default(),
            road_style: LineStyle::default(),
            roads: RoadQueryConfig::default(),
        }
    }
}
