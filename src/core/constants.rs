//! Defaults for the Paris start/finish viewer and the Overpass service it
//! queries. `ViewerConfig` and `RoadQueryConfig` start from these values.

/// Public Overpass API interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Radius of the road query around its center, in meters.
pub const DEFAULT_ROAD_RADIUS_M: f64 = 10_000.0;

/// Road query center (same landmark the start marker begins on).
pub const DEFAULT_ROAD_CENTER: (f64, f64) = (48.8566, 2.3522);

/// Initial map view center and zoom.
pub const DEFAULT_VIEW_CENTER: (f64, f64) = (48.864716, 2.349014);
pub const DEFAULT_VIEW_ZOOM: f64 = 13.0;

/// Attribution line drawn in the map corner.
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Marker icon size, in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (38, 38);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (u32, u32) = (19, 38);

/// Popup offset relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (i32, i32) = (0, -38);

/// Default HTTP timeout for geodata queries, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
