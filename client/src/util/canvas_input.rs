//! Canvas input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use bubblemap_canvas::camera::ScreenPoint;
use bubblemap_canvas::input::GestureState;
#[cfg(feature = "csr")]
use bubblemap_canvas::input::WheelDelta;

/// Client-space coordinates converted to canvas-relative screen space.
#[must_use]
pub fn relative_to_canvas(client_x: f64, client_y: f64, canvas_left: f64, canvas_top: f64) -> ScreenPoint {
    ScreenPoint::new(client_x - canvas_left, client_y - canvas_top)
}

/// Whether a pointer move reports no buttons held while the engine still
/// believes a pointer gesture is active, meaning the release was never
/// delivered (a modal prompt can swallow it).
#[must_use]
pub fn release_was_missed(buttons: u16, gesture: &GestureState) -> bool {
    buttons == 0 && matches!(gesture, GestureState::PanningCamera { .. } | GestureState::DraggingNode { .. })
}

/// Touch input is handled through touch events; pointer events generated
/// for the same fingers are skipped.
#[must_use]
pub fn is_touch_pointer(pointer_type: &str) -> bool {
    pointer_type == "touch"
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> ScreenPoint {
    ScreenPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> ScreenPoint {
    ScreenPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}

/// Every active touch, in canvas-relative screen coordinates.
#[cfg(feature = "csr")]
pub fn touch_points(ev: &leptos::ev::TouchEvent, canvas: &web_sys::HtmlCanvasElement) -> Vec<ScreenPoint> {
    let rect = canvas.get_bounding_client_rect();
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| relative_to_canvas(f64::from(t.client_x()), f64::from(t.client_y()), rect.left(), rect.top()))
        .collect()
}
