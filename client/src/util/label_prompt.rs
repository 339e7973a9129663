//! Label editor backed by the browser's blocking `window.prompt`.

#[cfg(feature = "csr")]
use bubblemap_canvas::input::LabelEdit;

/// Message shown above the prompt's text field.
pub const EDIT_LABEL_MESSAGE: &str = "Edit label:";

/// Ask the user for a replacement label, pre-filled with `current`.
///
/// A dismissed prompt, or a browser that refuses to show one, yields
/// [`LabelEdit::Cancelled`].
#[cfg(feature = "csr")]
pub fn request_label(current: &str) -> LabelEdit {
    let Some(window) = web_sys::window() else {
        return LabelEdit::Cancelled;
    };
    match window.prompt_with_message_and_default(EDIT_LABEL_MESSAGE, current) {
        Ok(response) => LabelEdit::from_prompt(response),
        Err(err) => {
            log::warn!("label prompt unavailable: {err:?}");
            LabelEdit::Cancelled
        }
    }
}
