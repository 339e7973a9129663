//! Bottom status bar showing gesture mode, bubble count, camera and render telemetry.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;

/// Status bar pinned to the bottom of the viewer.
#[component]
pub fn StatusBar() -> impl IntoView {
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let mode = move || canvas_view.with(|v| v.mode);
    let mode_class = move || format!("status-bar__mode status-bar__mode--{}", mode());
    let node_count = move || canvas_view.with(CanvasViewState::node_count_label);
    let zoom = move || canvas_view.with(CanvasViewState::zoom_label);
    let pan = move || canvas_view.with(CanvasViewState::pan_label);
    let viewport = move || canvas_view.with(CanvasViewState::viewport_label);
    let render = move || canvas_view.with(CanvasViewState::render_label);

    view! {
        <div class="status-bar">
            <span class=mode_class>{mode}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__objects">{node_count}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__item">{pan}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__item">{viewport}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__item">{render}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__zoom">{zoom}</span>
        </div>
    }
}
