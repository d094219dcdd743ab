use crate::{core::geo::LatLng, MapError, Result};

#[cfg(feature = "egui")]
use egui::Color32;

use serde::{Deserialize, Serialize};

/// Serializable color type that can convert to/from egui::Color32
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[cfg(feature = "egui")]
impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        Self {
            r: color.r(),
            g: color.g(),
            b: color.b(),
            a: color.a(),
        }
    }
}

#[cfg(feature = "egui")]
impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Style for road polylines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: SerializableColor,
    /// Line width
    pub width: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::rgb(0, 0, 255),
            width: 2.0,
            opacity: 1.0,
        }
    }
}

/// One mapped way, ready to draw as a polyline
///
/// Always holds at least two valid coordinates; both [`RoadSegment::new`] and
/// deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoadSegment")]
pub struct RoadSegment {
    id: i64,
    coordinates: Vec<LatLng>,
}

#[derive(Deserialize)]
struct RawRoadSegment {
    id: i64,
    coordinates: Vec<LatLng>,
}

impl TryFrom<RawRoadSegment> for RoadSegment {
    type Error = MapError;

    fn try_from(raw: RawRoadSegment) -> std::result::Result<Self, Self::Error> {
        if raw.coordinates.len() < 2 {
            return Err(MapError::InvalidCoordinates(format!(
                "road {} has {} points, need at least 2",
                raw.id,
                raw.coordinates.len()
            )));
        }
        if let Some(bad) = raw.coordinates.iter().find(|coord| !coord.is_valid()) {
            return Err(MapError::InvalidCoordinates(format!(
                "road {} has out-of-range point ({}, {})",
                raw.id, bad.lat, bad.lng
            )));
        }
        Ok(Self {
            id: raw.id,
            coordinates: raw.coordinates,
        })
    }
}

impl RoadSegment {
    pub fn new(id: i64, coordinates: Vec<LatLng>) -> Result<Self> {
        Ok(Self::try_from(RawRoadSegment { id, coordinates })?)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn coordinates(&self) -> &[LatLng] {
        &self.coordinates
    }

    /// `[[lat, lng], ...]` form of the polyline
    pub fn coordinate_pairs(&self) -> Vec<[f64; 2]> {
        self.coordinates.iter().map(LatLng::to_array).collect()
    }
}

/// The set of road polylines currently shown over the map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadOverlay {
    segments: Vec<RoadSegment>,
    style: LineStyle,
}

impl RoadOverlay {
    pub fn new(style: LineStyle) -> Self {
        Self {
            segments: Vec::new(),
            style,
        }
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Swaps in a freshly loaded list; the previous one is dropped
    pub fn replace(&mut self, segments: Vec<RoadSegment>) {
        self.segments = segments;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
