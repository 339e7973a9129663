//! Viewer configuration embedded in the host page.
//!
//! A page may carry `<script type="application/json" id="bubblemap-config">`
//! with a JSON [`ViewerConfig`]. No element, or an empty one, means defaults.

#[cfg(test)]
#[path = "viewer_config_test.rs"]
mod viewer_config_test;

use bubblemap_canvas::config::{ConfigError, ViewerConfig};

/// DOM id of the inline config element.
pub const CONFIG_ELEMENT_ID: &str = "bubblemap-config";

/// Parse the raw text of the config element.
///
/// # Errors
///
/// Returns the decode or validation error for non-blank text that is not a valid config.
pub fn parse_viewer_config(raw: Option<&str>) -> Result<ViewerConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ViewerConfig::default()),
        Some(text) => ViewerConfig::from_json(text),
    }
}

/// Text content of the config element, if the page has one.
#[cfg(feature = "csr")]
pub fn read_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
