use super::*;
use bubblemap_canvas::camera::WorldVector;

#[test]
fn relative_to_canvas_subtracts_origin() {
    assert_eq!(relative_to_canvas(120.0, 80.0, 20.0, 30.0), ScreenPoint::new(100.0, 50.0));
}

#[test]
fn relative_to_canvas_at_page_origin_is_identity() {
    assert_eq!(relative_to_canvas(7.5, 9.0, 0.0, 0.0), ScreenPoint::new(7.5, 9.0));
}

#[test]
fn release_missed_while_dragging_without_buttons() {
    let drag = GestureState::DraggingNode { id: 1, grab_offset_world: WorldVector::default() };
    assert!(release_was_missed(0, &drag));
}

#[test]
fn release_missed_while_panning_without_buttons() {
    let pan = GestureState::PanningCamera {
        pointer_anchor_screen: ScreenPoint::default(),
        camera_offset_at_start: ScreenPoint::default(),
    };
    assert!(release_was_missed(0, &pan));
}

#[test]
fn release_not_missed_with_primary_held() {
    let drag = GestureState::DraggingNode { id: 1, grab_offset_world: WorldVector::default() };
    assert!(!release_was_missed(1, &drag));
}

#[test]
fn release_not_missed_when_idle_or_pinching() {
    assert!(!release_was_missed(0, &GestureState::Idle));
    assert!(!release_was_missed(0, &GestureState::Pinching { last_distance: 10.0 }));
}

#[test]
fn touch_pointer_detection() {
    assert!(is_touch_pointer("touch"));
    assert!(!is_touch_pointer("mouse"));
    assert!(!is_touch_pointer("pen"));
}
