//! Bridge component between Leptos state and the imperative `bubblemap_canvas::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns gesture semantics and painting. This host maps DOM
//! pointer, touch, wheel and resize events into engine calls, carries out the
//! actions the engine returns, and publishes viewport telemetry.
//!
//! Each event borrows the engine, runs one handler to completion, applies the
//! resulting actions and releases the borrow. Label prompts block, so they run
//! only after that borrow is released; the answer is fed back through
//! `commit_label` under a fresh borrow.

use leptos::prelude::*;

use bubblemap_canvas::config::ViewerConfig;

use crate::state::canvas_view::CanvasViewState;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{
    is_touch_pointer, pointer_point, release_was_missed, touch_points, wheel_delta, wheel_point,
};
#[cfg(feature = "csr")]
use crate::util::canvas_viewport::{now_ms, sync_canvas_view_state, sync_viewport};
#[cfg(feature = "csr")]
use crate::util::label_prompt::request_label;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use bubblemap_canvas::doc::NodeId;
#[cfg(feature = "csr")]
use bubblemap_canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use bubblemap_canvas::input::Cursor;

#[cfg(feature = "csr")]
type EngineSlot = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "csr")]
fn render_and_track(engine: &Engine, canvas_view: RwSignal<CanvasViewState>) {
    let started_ms = now_ms();
    if let Err(err) = engine.render() {
        log::error!("render failed: {err:?}");
    }
    let elapsed_ms = (now_ms() - started_ms).max(0.0);
    canvas_view.update(|view| {
        view.last_render_ms = Some(elapsed_ms);
    });
}

#[cfg(feature = "csr")]
fn apply_cursor(canvas_ref: NodeRef<leptos::html::Canvas>, cursor: Cursor) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    if let Err(err) = canvas.style().set_property("cursor", cursor.css()) {
        log::warn!("failed to set cursor: {err:?}");
    }
}

/// Carry out engine actions and publish telemetry. Returns the label edits
/// the engine asked for, to be prompted once the engine borrow is released.
#[cfg(feature = "csr")]
fn process_actions(
    actions: Vec<Action>,
    engine: &Engine,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    canvas_view: RwSignal<CanvasViewState>,
) -> Vec<(NodeId, String)> {
    let mut needs_render = false;
    let mut edits = Vec::new();
    for action in actions {
        match action {
            Action::RenderNeeded => needs_render = true,
            Action::SetCursor(cursor) => apply_cursor(canvas_ref, cursor),
            Action::EditLabelRequested { id, label } => edits.push((id, label)),
        }
    }
    sync_canvas_view_state(engine, canvas_view);
    if needs_render {
        render_and_track(engine, canvas_view);
    }
    edits
}

/// Run one engine handler and everything that follows from it.
#[cfg(feature = "csr")]
fn dispatch(
    engine: &EngineSlot,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    canvas_view: RwSignal<CanvasViewState>,
    handler: impl FnOnce(&mut Engine) -> Vec<Action>,
) {
    let edits = {
        let mut slot = engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };
        let actions = handler(engine);
        process_actions(actions, engine, canvas_ref, canvas_view)
    };

    for (id, current) in edits {
        let edit = request_label(&current);
        let mut slot = engine.borrow_mut();
        if let Some(engine) = slot.as_mut() {
            let actions = engine.commit_label(id, &edit);
            process_actions(actions, engine, canvas_ref, canvas_view);
        }
    }
}

/// Full-window canvas hosting the bubble diagram.
///
/// On mount, this creates the engine from `config`, sizes it to the element,
/// and keeps it sized to the window for the component's lifetime.
#[component]
pub fn CanvasHost(config: ViewerConfig) -> impl IntoView {
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine: EngineSlot = Rc::new(RefCell::new(None));
    #[cfg(not(feature = "csr"))]
    let _ = (config, canvas_view);

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let instance = Engine::from_config(canvas.clone(), &config).unwrap_or_else(|err| {
                log::warn!("viewer config rejected ({err}); using defaults");
                Engine::new(canvas.clone())
            });
            *engine.borrow_mut() = Some(instance);
            log::info!("canvas engine mounted");
            dispatch(&engine, canvas_ref, canvas_view, |e| sync_viewport(e, &canvas));
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            dispatch(&engine, canvas_ref, canvas_view, |e| sync_viewport(e, &canvas));
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if is_touch_pointer(&ev.pointer_type()) {
                    return;
                }
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture refused: {err:?}");
                    }
                }
                let point = pointer_point(&ev);
                let now = now_ms();
                dispatch(&engine, canvas_ref, canvas_view, |e| e.on_pointer_down(point, now));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if is_touch_pointer(&ev.pointer_type()) {
                    return;
                }
                let point = pointer_point(&ev);
                let buttons = ev.buttons();
                dispatch(&engine, canvas_ref, canvas_view, |e| {
                    if release_was_missed(buttons, &e.gesture()) {
                        e.on_pointer_up()
                    } else {
                        e.on_pointer_move(point)
                    }
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if is_touch_pointer(&ev.pointer_type()) {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if canvas.has_pointer_capture(ev.pointer_id()) {
                        if let Err(err) = canvas.release_pointer_capture(ev.pointer_id()) {
                            log::debug!("pointer capture release failed: {err:?}");
                        }
                    }
                }
                dispatch(&engine, canvas_ref, canvas_view, Engine::on_pointer_up);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let point = wheel_point(&ev);
                let delta = wheel_delta(&ev);
                dispatch(&engine, canvas_ref, canvas_view, |e| e.on_wheel(point, delta));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let points = touch_points(&ev, &canvas);
                let now = now_ms();
                dispatch(&engine, canvas_ref, canvas_view, |e| e.on_touch_start(&points, now));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                let points = touch_points(&ev, &canvas);
                dispatch(&engine, canvas_ref, canvas_view, |e| e.on_touch_move(&points));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::TouchEvent| {
                dispatch(&engine, canvas_ref, canvas_view, Engine::on_touch_end);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_pointer_cancel = on_pointer_up.clone();
    let on_touch_cancel = on_touch_end.clone();

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:wheel=on_wheel
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
