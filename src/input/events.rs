use crate::core::geo::LatLng;
use crate::layers::marker::MarkerKey;
use serde::{Deserialize, Serialize};

/// Pointer input a map widget reports about markers
///
/// Any rendering binding can translate its own mouse/touch model into these
/// three events; the drag logic never sees widget types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button went down over a marker
    PressStart { key: MarkerKey },
    /// Pointer entered a marker while the button is held
    HoverWhilePressed { key: MarkerKey, position: LatLng },
    /// Primary button released anywhere
    Release,
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(self) -> bool {
        self == EventHandled::Handled
    }
}

/// Receiver side of [`PointerEvent`]
pub trait PointerEvents {
    fn on_press_start(&mut self, key: MarkerKey) -> EventHandled;

    fn on_hover_while_pressed(&mut self, key: MarkerKey, position: LatLng) -> EventHandled;

    fn on_release(&mut self) -> EventHandled;

    /// Routes a reified event to the matching callback
    fn dispatch(&mut self, event: &PointerEvent) -> EventHandled {
        match event {
            PointerEvent::PressStart { key } => self.on_press_start(*key),
            PointerEvent::HoverWhilePressed { key, position } => {
                self.on_hover_while_pressed(*key, *position)
            }
            PointerEvent::Release => self.on_release(),
        }
    }
}
