use crate::core::{
    constants::TILE_SIZE,
    geo::{LatLng, Point},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator latitude limit
const MAX_LATITUDE: f64 = 85.0511287798;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), center.lng);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Projects a LatLng to world pixel coordinates (EPSG:3857) at the current zoom
    pub fn project(&self, lat_lng: &LatLng) -> Point {
        let scale = TILE_SIZE as f64 * 2_f64.powf(self.zoom);
        let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = (lat_lng.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (PI / 4.0 + lat / 2.0).tan().ln() / PI) / 2.0 * scale;

        Point::new(x, y)
    }

    /// Inverse of [`Viewport::project`]
    pub fn unproject(&self, pixel: &Point) -> LatLng {
        let scale = TILE_SIZE as f64 * 2_f64.powf(self.zoom);

        let lng = pixel.x / scale * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * pixel.y / scale);
        let lat = n.sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a geographical coordinate to container-relative pixels
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.project(&self.center).subtract(&self.size.multiply(0.5));
        self.project(lat_lng).subtract(&origin)
    }

    /// Converts container-relative pixels to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center).subtract(&self.size.multiply(0.5));
        self.unproject(&pixel.add(&origin))
    }

    /// Pans the view by a pixel delta (content follows the pointer)
    pub fn pan(&mut self, delta: Point) {
        let center_px = self.project(&self.center).subtract(&delta);
        let center = self.unproject(&center_px);
        self.set_center(center);
    }

    /// Zooms by `delta` levels keeping the coordinate under `focus` fixed
    pub fn zoom_around(&mut self, focus: Point, delta: f64) {
        let anchor = self.pixel_to_lat_lng(&focus);
        self.set_zoom(self.zoom + delta);
        let drift = self.lat_lng_to_pixel(&anchor).subtract(&focus);
        self.pan(drift.multiply(-1.0));
    }
}
