//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and environment concerns from component
//! logic.

pub mod canvas_input;
pub mod canvas_viewport;
pub mod label_prompt;
pub mod viewer_config;
