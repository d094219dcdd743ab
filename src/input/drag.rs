//! Drag session state machine for the start/finish markers
//!
//! ```text
//! Idle --press(Start)--> DraggingStart --release--> Idle
//! Idle --press(Finish)-> DraggingEnd   --release--> Idle
//! ```
//!
//! Hover is ignored unless the button is held.

use crate::layers::marker::MarkerRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    DraggingStart,
    DraggingEnd,
}

/// Transient record of which marker, if any, the pointer is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragSession {
    state: DragState,
    pressed: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle && !self.pressed
    }

    /// Button went down over a marker with `role`.
    ///
    /// A press on the start marker always targets it, even over an ongoing
    /// finish move; a press on the finish marker only targets it from idle.
    /// A marker with no role only records the press.
    pub fn press(&mut self, role: MarkerRole) {
        match role {
            MarkerRole::Start => self.state = DragState::DraggingStart,
            MarkerRole::Finish if self.state == DragState::Idle => {
                self.state = DragState::DraggingEnd
            }
            MarkerRole::Finish | MarkerRole::None => {}
        }
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.state = DragState::Idle;
    }

    /// Role of the marker a hover should move, if any
    pub fn dragged_role(&self) -> Option<MarkerRole> {
        if !self.pressed {
            return None;
        }
        match self.state {
            DragState::DraggingStart => Some(MarkerRole::Start),
            DragState::DraggingEnd => Some(MarkerRole::Finish),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_start_and_release() {
        let mut session = DragSession::new();
        assert!(session.is_idle());

        session.press(MarkerRole::Start);
        assert_eq!(session.state(), DragState::DraggingStart);
        assert!(session.is_pressed());
        assert_eq!(session.dragged_role(), Some(MarkerRole::Start));

        session.release();
        assert!(session.is_idle());
        assert_eq!(session.dragged_role(), None);
    }

    #[test]
    fn test_press_finish() {
        let mut session = DragSession::new();
        session.press(MarkerRole::Finish);
        assert_eq!(session.state(), DragState::DraggingEnd);
        assert_eq!(session.dragged_role(), Some(MarkerRole::Finish));
    }

    #[test]
    fn test_press_on_plain_marker_only_records_press() {
        let mut session = DragSession::new();
        session.press(MarkerRole::None);
        assert!(session.is_pressed());
        assert_eq!(session.state(), DragState::Idle);
        assert_eq!(session.dragged_role(), None);
    }

    #[test]
    fn test_start_wins_over_second_press() {
        let mut session = DragSession::new();
        session.press(MarkerRole::Start);
        session.press(MarkerRole::Finish);
        assert_eq!(session.state(), DragState::DraggingStart);

        let mut session = DragSession::new();
        session.press(MarkerRole::Finish);
        session.press(MarkerRole::Start);
        assert_eq!(session.state(), DragState::DraggingStart);
    }

    #[test]
    fn test_plain_press_keeps_finish_move() {
        let mut session = DragSession::new();
        session.press(MarkerRole::Finish);
        session.press(MarkerRole::None);
        assert_eq!(session.state(), DragState::DraggingEnd);
    }

    #[test]
    fn test_release_from_idle_is_harmless() {
        let mut session = DragSession::new();
        session.release();
        assert!(session.is_idle());
    }
}
