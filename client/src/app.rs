//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use bubblemap_canvas::config::ViewerConfig;

use crate::components::{canvas_host::CanvasHost, status_bar::StatusBar};
use crate::state::canvas_view::CanvasViewState;

/// Root application component.
///
/// Provides the shared canvas telemetry context and lays out the viewer.
#[component]
pub fn App(config: ViewerConfig) -> impl IntoView {
    provide_meta_context();

    let canvas_view = RwSignal::new(CanvasViewState::default());
    provide_context(canvas_view);

    view! {
        <Title text="Bubblemap"/>
        <main class="viewer">
            <CanvasHost config=config/>
            <StatusBar/>
        </main>
    }
}
