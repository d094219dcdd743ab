//! Prelude module for common roadview types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use roadview::prelude::*;`

pub use crate::core::{
    config::{IconConfig, LoadTrigger, RoadQueryConfig, ViewerConfig},
    geo::{LatLng, Point},
    state::ViewerState,
    viewport::Viewport,
};

pub use crate::layers::{
    marker::{Marker, MarkerKey, MarkerRole, MarkerSet},
    road::{LineStyle, RoadOverlay, RoadSegment, SerializableColor},
};

pub use crate::input::{
    drag::{DragSession, DragState},
    events::{EventHandled, PointerEvent, PointerEvents},
};

pub use crate::data::overpass::{highway_query, parse_roads};

pub use crate::roads::{
    loader::RoadLoader,
    source::{OverpassSource, RoadSource},
};

#[cfg(feature = "egui")]
pub use crate::ui::{widget::MapWidget, UiMapExt};

pub use crate::{Error as MapError, Result};
