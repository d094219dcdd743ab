use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, MapError, Result};

/// Stable identifier of a marker within its set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerKey(pub u32);

impl std::fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// What a marker stands for on the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerRole {
    Start,
    Finish,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    key: MarkerKey,
    position: LatLng,
    popup_text: String,
    role: MarkerRole,
    draggable: bool,
}

impl Marker {
    pub fn new(key: MarkerKey, position: LatLng, role: MarkerRole) -> Self {
        Self {
            key,
            position,
            popup_text: String::new(),
            role,
            draggable: true,
        }
    }

    pub fn with_popup(mut self, text: impl Into<String>) -> Self {
        self.popup_text = text.into();
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn key(&self) -> MarkerKey {
        self.key
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn popup_text(&self) -> &str {
        &self.popup_text
    }

    pub fn role(&self) -> MarkerRole {
        self.role
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }
}

/// The fixed pair of start and finish markers
///
/// A set always holds exactly one [`MarkerRole::Start`] and one
/// [`MarkerRole::Finish`] marker with distinct keys. Markers can be moved but
/// never added or removed. Deserialization applies the same checks as
/// [`MarkerSet::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMarkerSet")]
pub struct MarkerSet {
    markers: [Marker; 2],
}

#[derive(Deserialize)]
struct RawMarkerSet {
    markers: [Marker; 2],
}

impl TryFrom<RawMarkerSet> for MarkerSet {
    type Error = MapError;

    fn try_from(raw: RawMarkerSet) -> std::result::Result<Self, Self::Error> {
        let [start, finish] = raw.markers;
        Self::validate(&start, &finish)?;
        Ok(Self {
            markers: [start, finish],
        })
    }
}

impl MarkerSet {
    pub fn new(start: Marker, finish: Marker) -> Result<Self> {
        Self::validate(&start, &finish)?;
        Ok(Self {
            markers: [start, finish],
        })
    }

    fn validate(start: &Marker, finish: &Marker) -> std::result::Result<(), MapError> {
        if start.role != MarkerRole::Start {
            return Err(MapError::InvalidMarkers(format!(
                "{} must have the start role, got {:?}",
                start.key, start.role
            )));
        }
        if finish.role != MarkerRole::Finish {
            return Err(MapError::InvalidMarkers(format!(
                "{} must have the finish role, got {:?}",
                finish.key, finish.role
            )));
        }
        if start.key == finish.key {
            return Err(MapError::InvalidMarkers(format!(
                "duplicate key {}",
                start.key
            )));
        }
        Ok(())
    }

    /// Eiffel Tower as start and Arc de Triomphe as finish
    pub fn paris_landmarks() -> Self {
        Self {
            markers: [
                Marker::new(MarkerKey(1), LatLng::new(48.8566, 2.3522), MarkerRole::Start)
                    .with_popup("Eiffel Tower, Paris"),
                Marker::new(MarkerKey(2), LatLng::new(48.8738, 2.2950), MarkerRole::Finish)
                    .with_popup("Arc de Triomphe, Paris"),
            ],
        }
    }

    pub fn get(&self, key: MarkerKey) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.key == key)
    }

    pub fn contains(&self, key: MarkerKey) -> bool {
        self.get(key).is_some()
    }

    pub fn start(&self) -> &Marker {
        &self.markers[0]
    }

    pub fn finish(&self) -> &Marker {
        &self.markers[1]
    }

    /// Moves the marker holding `role`; returns false when no marker has it
    pub fn set_position_for_role(&mut self, role: MarkerRole, position: LatLng) -> bool {
        match self.markers.iter_mut().find(|marker| marker.role == role) {
            Some(marker) => {
                marker.set_position(position);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::paris_landmarks()
    }
}
