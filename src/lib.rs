//! # roadview
//!
//! A small map viewer core: two draggable start/finish markers and road
//! overlays fetched from the Overpass API.
//!
//! The drag logic and road loading are plain Rust types that can be driven
//! without a renderer. The optional `egui` feature adds a widget that paints
//! the state and adapts pointer input to [`PointerEvents`].

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod roads;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{IconConfig, LoadTrigger, RoadQueryConfig, ViewerConfig},
    geo::{LatLng, Point},
    state::ViewerState,
    viewport::Viewport,
};

pub use crate::layers::{
    marker::{Marker, MarkerKey, MarkerRole, MarkerSet},
    road::{LineStyle, RoadOverlay, RoadSegment},
};

pub use crate::input::{
    drag::{DragSession, DragState},
    events::{EventHandled, PointerEvent, PointerEvents},
};

pub use crate::roads::{
    loader::RoadLoader,
    source::{OverpassSource, RoadSource},
};

#[cfg(feature = "egui")]
pub use crate::ui::widget::MapWidget;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid marker set: {0}")]
    InvalidMarkers(String),
}

/// Error type alias for convenience
pub type Error = MapError;
