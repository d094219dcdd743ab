//! Marker drag behaviour driven through the pointer-event interface, the way
//! a widget binding would report it.

use roadview::prelude::*;

const START: MarkerKey = MarkerKey(1);
const FINISH: MarkerKey = MarkerKey(2);

fn eiffel() -> LatLng {
    LatLng::new(48.8566, 2.3522)
}

fn arc_de_triomphe() -> LatLng {
    LatLng::new(48.8738, 2.2950)
}

#[test]
fn test_initial_markers() {
    let state = ViewerState::from_config(&ViewerConfig::paris());
    let start = state.markers().get(START).unwrap();
    let finish = state.markers().get(FINISH).unwrap();

    assert_eq!(start.role(), MarkerRole::Start);
    assert_eq!(start.position(), eiffel());
    assert_eq!(finish.role(), MarkerRole::Finish);
    assert_eq!(finish.position(), arc_de_triomphe());
    assert!(state.drag().is_idle());
    assert!(state.roads().is_empty());
}

#[test]
fn test_press_release_round_trip_for_both_markers() {
    for key in [START, FINISH] {
        let mut state = ViewerState::default();
        state.on_press_start(key);
        assert!(!state.drag().is_idle());
        state.on_release();

        assert_eq!(state.drag().state(), DragState::Idle);
        assert!(!state.drag().is_pressed());
        assert_eq!(state.markers().start().position(), eiffel());
        assert_eq!(state.markers().finish().position(), arc_de_triomphe());
    }
}

#[test]
fn test_drag_start_moves_only_start() {
    let mut state = ViewerState::default();
    let target = LatLng::new(48.85, 2.34);

    state.on_press_start(START);
    state.on_hover_while_pressed(START, target);

    assert_eq!(state.markers().start().position(), target);
    assert_eq!(state.markers().finish().position(), arc_de_triomphe());
}

#[test]
fn test_drag_finish_moves_only_finish() {
    let mut state = ViewerState::default();
    let target = LatLng::new(48.88, 2.29);

    state.on_press_start(FINISH);
    state.on_hover_while_pressed(FINISH, target);

    assert_eq!(state.markers().finish().position(), target);
    assert_eq!(state.markers().start().position(), eiffel());
}

#[test]
fn test_hover_without_press_is_noop() {
    let mut state = ViewerState::default();
    let before = state.clone();

    let handled = state.on_hover_while_pressed(START, LatLng::new(1.0, 1.0));
    state.on_hover_while_pressed(FINISH, LatLng::new(2.0, 2.0));

    assert_eq!(handled, EventHandled::NotHandled);
    assert_eq!(state, before);
}

#[test]
fn test_release_ends_session_whichever_marker_was_active() {
    let mut state = ViewerState::default();
    state.on_press_start(FINISH);
    state.on_release();
    state.on_hover_while_pressed(FINISH, LatLng::new(0.0, 0.0));

    assert_eq!(state.markers().finish().position(), arc_de_triomphe());
}

#[test]
fn test_end_to_end_drag_of_start_marker() {
    let mut state = ViewerState::from_config(&ViewerConfig::paris());
    let events = [
        PointerEvent::PressStart { key: START },
        PointerEvent::HoverWhilePressed {
            key: START,
            position: LatLng::new(48.86, 2.35),
        },
        PointerEvent::Release,
    ];

    for event in &events {
        state.handle_event(event);
    }

    assert_eq!(state.markers().start().position(), LatLng::new(48.86, 2.35));
    assert_eq!(state.markers().finish().position(), arc_de_triomphe());
    assert!(state.drag().is_idle());
}

#[test]
fn test_successive_hovers_follow_the_pointer() {
    let mut state = ViewerState::default();
    state.on_press_start(START);
    for step in 1..=5 {
        let position = LatLng::new(48.8566 + step as f64 * 0.001, 2.3522);
        state.on_hover_while_pressed(START, position);
        assert_eq!(state.markers().start().position(), position);
    }
    state.on_release();
    assert_eq!(state.markers().start().position(), LatLng::new(48.8566 + 5.0 * 0.001, 2.3522));
}

#[test]
fn test_custom_marker_set() {
    let start = Marker::new(MarkerKey(10), LatLng::new(51.5007, -0.1246), MarkerRole::Start)
        .with_popup("Big Ben, London");
    let finish = Marker::new(MarkerKey(20), LatLng::new(51.5033, -0.1195), MarkerRole::Finish)
        .with_popup("London Eye, London");
    let markers = MarkerSet::new(start, finish).unwrap();
    let mut state = ViewerState::new(markers, LineStyle::default());

    state.on_press_start(MarkerKey(20));
    state.on_hover_while_pressed(MarkerKey(10), LatLng::new(51.5, -0.12));
    state.on_release();

    assert_eq!(state.markers().finish().position(), LatLng::new(51.5, -0.12));
    assert_eq!(state.markers().start().position(), LatLng::new(51.5007, -0.1246));
}

#[test]
fn test_start_press_takes_over_finish_drag() {
    let mut state = ViewerState::default();
    let target = LatLng::new(48.86, 2.33);

    state.on_press_start(FINISH);
    state.on_press_start(START);
    assert_eq!(state.drag().state(), DragState::DraggingStart);

    state.on_hover_while_pressed(START, target);
    state.on_release();

    assert_eq!(state.markers().start().position(), target);
    assert_eq!(state.markers().finish().position(), arc_de_triomphe());
}

#[test]
fn test_fixed_marker_ignores_drag() {
    let start = Marker::new(START, eiffel(), MarkerRole::Start).with_draggable(false);
    let finish = Marker::new(FINISH, arc_de_triomphe(), MarkerRole::Finish);
    let mut state = ViewerState::new(MarkerSet::new(start, finish).unwrap(), LineStyle::default());

    assert!(!state.handle_event(&PointerEvent::PressStart { key: START }).is_handled());
    state.handle_event(&PointerEvent::HoverWhilePressed {
        key: START,
        position: LatLng::new(48.86, 2.35),
    });
    state.handle_event(&PointerEvent::Release);

    assert_eq!(state.markers().start().position(), eiffel());
}
