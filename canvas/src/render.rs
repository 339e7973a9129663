//! Rendering: draws the bubble diagram to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene and camera and produces pixels.
//! It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::{EDGE_ALPHA, EDGE_WIDTH, GLOW_BLUR, LABEL_COLOR, LABEL_FONT, OVERLAY_ALPHA};
use crate::doc::{Node, Scene};

/// Draw the full scene: links first, then bubbles on top in scene order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let offset = camera.offset();

    // Layer 1: clear and set up transforms.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(offset.x, offset.y)?;
    ctx.scale(camera.scale(), camera.scale())?;

    // Layer 2: links.
    for (from, to) in scene.edge_endpoints() {
        draw_link(ctx, from, to)?;
    }

    // Layer 3: bubbles.
    for node in scene.nodes() {
        draw_bubble(ctx, node)?;
    }

    Ok(())
}

// =============================================================
// Links
// =============================================================

fn draw_link(ctx: &CanvasRenderingContext2d, from: &Node, to: &Node) -> Result<(), JsValue> {
    let (a, b) = (from.position, to.position);

    ctx.save();
    let gradient = ctx.create_linear_gradient(a.x, a.y, b.x, b.y);
    gradient.add_color_stop(0.0, &from.color.css_rgba(EDGE_ALPHA))?;
    gradient.add_color_stop(1.0, &to.color.css_rgba(EDGE_ALPHA))?;
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(EDGE_WIDTH);

    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

// =============================================================
// Bubbles
// =============================================================

fn draw_bubble(ctx: &CanvasRenderingContext2d, node: &Node) -> Result<(), JsValue> {
    let (x, y, r) = (node.position.x, node.position.y, node.radius);

    // Glowing opaque body. The shadow is scoped to this fill only.
    ctx.save();
    ctx.set_shadow_color(&node.color.to_string());
    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.set_fill_style_str(&node.color.css_rgba(1.0));
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.restore();

    // Translucent overlay.
    ctx.set_fill_style_str(&node.color.css_rgba(OVERLAY_ALPHA));
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, 2.0 * PI)?;
    ctx.fill();

    draw_label(ctx, node, x, y)
}

fn draw_label(ctx: &CanvasRenderingContext2d, node: &Node, x: f64, y: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&node.label, x, y)
}
