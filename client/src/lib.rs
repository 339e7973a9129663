//! # bubblemap-client
//!
//! Leptos + WASM frontend for the bubble diagram viewer.
//!
//! This crate mounts a full-window `<canvas>`, forwards DOM input to the
//! `bubblemap-canvas` engine through the `CanvasHost` bridge component, hosts
//! the label prompt, and shows a status bar fed by canvas telemetry.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, load the page config, mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    use bubblemap_canvas::config::ViewerConfig;

    use crate::app::App;
    use crate::util::viewer_config::{parse_viewer_config, read_config_text};

    console_error_panic_hook::set_once();

    let parsed = parse_viewer_config(read_config_text().as_deref());
    let level = parsed.as_ref().map_or(log::Level::Info, |config| config.log_level);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let config = parsed.unwrap_or_else(|err| {
        log::warn!("ignoring invalid viewer config: {err}");
        ViewerConfig::default()
    });
    log::info!("starting bubblemap viewer");

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
