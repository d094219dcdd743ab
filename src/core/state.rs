use crate::{
    core::{config::ViewerConfig, geo::LatLng},
    input::{
        drag::DragSession,
        events::{EventHandled, PointerEvent, PointerEvents},
    },
    layers::{
        marker::{MarkerKey, MarkerSet},
        road::{LineStyle, RoadOverlay, RoadSegment},
    },
};

/// Everything the viewer draws plus the in-flight drag
///
/// All mutation goes through the [`PointerEvents`] callbacks and
/// [`ViewerState::set_roads`], so the state can be driven in tests without a
/// rendering environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    markers: MarkerSet,
    drag: DragSession,
    roads: RoadOverlay,
}

impl ViewerState {
    pub fn new(markers: MarkerSet, road_style: LineStyle) -> Self {
        Self {
            markers,
            drag: DragSession::new(),
            roads: RoadOverlay::new(road_style),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(MarkerSet::paris_landmarks(), config.road_style.clone())
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn roads(&self) -> &RoadOverlay {
        &self.roads
    }

    pub fn set_roads(&mut self, segments: Vec<RoadSegment>) {
        log::debug!("overlay now shows {} roads", segments.len());
        self.roads.replace(segments);
    }

    pub fn handle_event(&mut self, event: &PointerEvent) -> EventHandled {
        self.dispatch(event)
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(MarkerSet::default(), LineStyle::default())
    }
}

impl PointerEvents for ViewerState {
    fn on_press_start(&mut self, key: MarkerKey) -> EventHandled {
        let Some(marker) = self.markers.get(key) else {
            log::debug!("press on unknown {} ignored", key);
            return EventHandled::NotHandled;
        };
        if !marker.is_draggable() {
            log::debug!("press on fixed {} ignored", key);
            return EventHandled::NotHandled;
        }
        self.drag.press(marker.role());
        EventHandled::Handled
    }

    /// Moves the marker being dragged, which is not necessarily the one under
    /// the pointer.
    fn on_hover_while_pressed(&mut self, key: MarkerKey, position: LatLng) -> EventHandled {
        if !self.drag.is_pressed() {
            return EventHandled::NotHandled;
        }
        if !self.markers.contains(key) {
            log::debug!("hover on unknown {} ignored", key);
            return EventHandled::NotHandled;
        }
        if !position.is_valid() {
            log::debug!("hover at out-of-range ({}, {}) ignored", position.lat, position.lng);
            return EventHandled::NotHandled;
        }
        let Some(role) = self.drag.dragged_role() else {
            return EventHandled::NotHandled;
        };
        if self.markers.set_position_for_role(role, position) {
            EventHandled::Handled
        } else {
            EventHandled::NotHandled
        }
    }

    fn on_release(&mut self) -> EventHandled {
        self.drag.release();
        EventHandled::Handled
    }
}
