use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    CanvasRenderingContext2d, DragEvent, File, HtmlCanvasElement, HtmlInputElement, KeyboardEvent,
    MouseEvent, TouchEvent, WheelEvent,
};
use yew::prelude::*;

mod assets;
mod components;
mod export;
mod geometry;
mod model;
mod render;
mod state;
mod util;

use assets::{AssetError, Generation, ImageResource};
use components::{EditorControls, UploadOverlay};
use model::{
    EditorAction, EditorState, FRAME_ASSET_PATH, ImagePosition, PAN_STEP, PREVIEW_SIZE, SubjectInfo,
};
use state::GestureState;
use state::gesture::{touch_distance, wheel_scale};

/// Map a client-coordinate event position into canvas-logical space. Every
/// gesture handler funnels through this one conversion.
fn canvas_point(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    geometry::to_canvas_space(
        client_x,
        client_y,
        rect.left(),
        rect.top(),
        rect.width(),
        PREVIEW_SIZE,
    )
}

fn open_file_picker(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.click();
    }
}

#[derive(Properties, PartialEq, Clone)]
struct FrameEditorProps {
    pub editor: UseReducerHandle<EditorState>,
}

#[function_component(FrameEditor)]
fn frame_editor(props: &FrameEditorProps) -> Html {
    let canvas_ref = use_node_ref();
    let file_input_ref = use_node_ref();
    let position = use_mut_ref(ImagePosition::default);
    let gesture_state = use_mut_ref(GestureState::default);
    let subject_res = use_mut_ref(|| None::<ImageResource>);
    let frame_res = use_mut_ref(|| None::<ImageResource>);
    let upload_generation = use_mut_ref(Generation::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Shared upload entry point for the file picker and drag-drop. A stale,
    // slower load that finishes after a newer upload started is dropped by
    // the generation check rather than cancelled.
    let handle_upload: Rc<dyn Fn(File)> = {
        let subject_res = subject_res.clone();
        let position = position.clone();
        let upload_generation = upload_generation.clone();
        let editor = props.editor.clone();
        Rc::new(move |file: File| {
            let ticket = upload_generation.borrow().next();
            let subject_res = subject_res.clone();
            let position = position.clone();
            let upload_generation = upload_generation.clone();
            let editor = editor.clone();
            spawn_local(async move {
                match assets::load_subject_file(file).await {
                    Ok(resource) => {
                        if !upload_generation.borrow().is_current(ticket) {
                            resource.release();
                            return;
                        }
                        let info = SubjectInfo {
                            width: resource.natural_width,
                            height: resource.natural_height,
                        };
                        if let Some(old) = subject_res.borrow_mut().replace(resource) {
                            old.release();
                        }
                        *position.borrow_mut() = ImagePosition::default();
                        editor.dispatch(EditorAction::SubjectLoaded(info));
                    }
                    Err(AssetError::UnsupportedType(mime)) => {
                        gloo::console::warn!("ignoring non-image upload:", mime);
                    }
                    Err(err) => {
                        gloo::console::error!("subject load failed:", err.to_string());
                    }
                }
            });
        })
    };

    // Redraw whenever the reducer records a change (resource readiness,
    // export state). Gesture-rate redraws call the stored closure directly.
    {
        let draw_ref = draw_ref.clone();
        let epoch = props.editor.render_epoch;
        use_effect_with(epoch, move |_| {
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // One-time frame load with bounded wait; failure degrades to no overlay.
    {
        let frame_res = frame_res.clone();
        let editor = props.editor.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match assets::load_frame(FRAME_ASSET_PATH).await {
                    Ok(resource) => {
                        *frame_res.borrow_mut() = Some(resource);
                        editor.dispatch(EditorAction::FrameLoaded);
                    }
                    Err(err) => {
                        gloo::console::warn!("frame load failed:", err.to_string());
                        editor.dispatch(EditorAction::FrameFailed(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    // Canvas setup: draw closure plus all gesture listeners, removed on
    // unmount.
    {
        let canvas_ref = canvas_ref.clone();
        let file_input_ref = file_input_ref.clone();
        let position = position.clone();
        let gesture_state = gesture_state.clone();
        let subject_res = subject_res.clone();
        let frame_res = frame_res.clone();
        let draw_ref_setup = draw_ref.clone();
        let handle_upload = handle_upload.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let position = position.clone();
                let subject_res = subject_res.clone();
                let frame_res = frame_res.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(c) => c,
                        None => return,
                    };
                    let pos = *position.borrow();
                    let subject = subject_res.borrow();
                    let frame = frame_res.borrow();
                    if let Err(err) = render::draw_composite(
                        &ctx,
                        PREVIEW_SIZE,
                        subject.as_ref(),
                        frame.as_ref(),
                        &pos,
                    ) {
                        gloo::console::error!("draw failed:", err);
                        render::draw_error_indicator(&ctx, PREVIEW_SIZE);
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());

            // Initial draw: white base coat and ring before any photo.
            (draw_closure)();

            // Mouse down: begin a drag, or open the picker when no subject.
            let mousedown_cb = {
                let canvas = canvas.clone();
                let gesture_state = gesture_state.clone();
                let position = position.clone();
                let subject_res = subject_res.clone();
                let file_input_ref = file_input_ref.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    if subject_res.borrow().is_none() {
                        open_file_picker(&file_input_ref);
                        return;
                    }
                    let (x, y) = canvas_point(&canvas, e.client_x() as f64, e.client_y() as f64);
                    gesture_state.borrow_mut().press(x, y, *position.borrow());
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Mouse move
            let mousemove_cb = {
                let canvas = canvas.clone();
                let gesture_state = gesture_state.clone();
                let position = position.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if gesture_state.borrow().is_idle() {
                        return;
                    }
                    let (x, y) = canvas_point(&canvas, e.client_x() as f64, e.client_y() as f64);
                    let update = gesture_state.borrow().move_to(x, y, *position.borrow());
                    if let Some(next) = update {
                        *position.borrow_mut() = next;
                        if let Some(f) = &*draw_ref.borrow() {
                            f();
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Mouse up ends the drag wherever it happens.
            let mouseup_cb = {
                let gesture_state = gesture_state.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    gesture_state.borrow_mut().release();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let mouseleave_cb = {
                let gesture_state = gesture_state.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    gesture_state.borrow_mut().release();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Wheel: fixed scale step per notch, no active gesture required.
            let wheel_cb = {
                let subject_res = subject_res.clone();
                let position = position.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    if subject_res.borrow().is_none() {
                        return;
                    }
                    let next = wheel_scale(*position.borrow(), e.delta_y());
                    *position.borrow_mut() = next;
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            // Touch: single finger drags, two fingers pinch. Pinch wins as
            // soon as a second contact lands.
            let touchstart_cb = {
                let canvas = canvas.clone();
                let gesture_state = gesture_state.clone();
                let position = position.clone();
                let subject_res = subject_res.clone();
                let file_input_ref = file_input_ref.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.touches();
                    if touches.length() >= 2 {
                        if subject_res.borrow().is_none() {
                            return;
                        }
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let a =
                                canvas_point(&canvas, t0.client_x() as f64, t0.client_y() as f64);
                            let b =
                                canvas_point(&canvas, t1.client_x() as f64, t1.client_y() as f64);
                            let dist = touch_distance(a, b);
                            gesture_state.borrow_mut().begin_pinch(dist, *position.borrow());
                        }
                    } else if let Some(t0) = touches.item(0) {
                        if subject_res.borrow().is_none() {
                            open_file_picker(&file_input_ref);
                            return;
                        }
                        let (x, y) =
                            canvas_point(&canvas, t0.client_x() as f64, t0.client_y() as f64);
                        gesture_state.borrow_mut().press(x, y, *position.borrow());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touchmove_cb = {
                let canvas = canvas.clone();
                let gesture_state = gesture_state.clone();
                let position = position.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.touches();
                    let update = if touches.length() >= 2 {
                        match (touches.item(0), touches.item(1)) {
                            (Some(t0), Some(t1)) => {
                                let a = canvas_point(
                                    &canvas,
                                    t0.client_x() as f64,
                                    t0.client_y() as f64,
                                );
                                let b = canvas_point(
                                    &canvas,
                                    t1.client_x() as f64,
                                    t1.client_y() as f64,
                                );
                                gesture_state
                                    .borrow()
                                    .pinch_to(touch_distance(a, b), *position.borrow())
                            }
                            _ => None,
                        }
                    } else if let Some(t0) = touches.item(0) {
                        let (x, y) =
                            canvas_point(&canvas, t0.client_x() as f64, t0.client_y() as f64);
                        gesture_state.borrow().move_to(x, y, *position.borrow())
                    } else {
                        None
                    };
                    if let Some(next) = update {
                        *position.borrow_mut() = next;
                        if let Some(f) = &*draw_ref.borrow() {
                            f();
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Touch end: all lifted goes idle; dropping from two contacts to
            // one re-anchors as a fresh drag so the stale pinch baseline is
            // never reused.
            let touchend_cb = {
                let canvas = canvas.clone();
                let gesture_state = gesture_state.clone();
                let position = position.clone();
                let subject_res = subject_res.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let touches = e.touches();
                    match touches.length() {
                        0 => gesture_state.borrow_mut().release(),
                        1 => {
                            if let Some(t0) = touches.item(0) {
                                let (x, y) = canvas_point(
                                    &canvas,
                                    t0.client_x() as f64,
                                    t0.client_y() as f64,
                                );
                                let mut gestures = gesture_state.borrow_mut();
                                gestures.release();
                                if subject_res.borrow().is_some() {
                                    gestures.press(x, y, *position.borrow());
                                }
                            }
                        }
                        _ => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touchend_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Keyboard: +/- zoom steps, arrows pan.
            let keydown_cb = {
                let subject_res = subject_res.clone();
                let position = position.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if subject_res.borrow().is_none() {
                        return;
                    }
                    let current = *position.borrow();
                    let next = match e.key().as_str() {
                        "+" | "=" => current.stepped_scale(1.0),
                        "-" | "_" => current.stepped_scale(-1.0),
                        "ArrowLeft" => current.panned(-PAN_STEP, 0.0),
                        "ArrowRight" => current.panned(PAN_STEP, 0.0),
                        "ArrowUp" => current.panned(0.0, -PAN_STEP),
                        "ArrowDown" => current.panned(0.0, PAN_STEP),
                        _ => return,
                    };
                    e.prevent_default();
                    *position.borrow_mut() = next;
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .unwrap();

            // Drag-drop upload onto the canvas.
            let dragover_cb = {
                Closure::wrap(Box::new(move |e: DragEvent| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("dragover", dragover_cb.as_ref().unchecked_ref())
                .unwrap();

            let drop_cb = {
                let handle_upload = handle_upload.clone();
                Closure::wrap(Box::new(move |e: DragEvent| {
                    e.prevent_default();
                    let Some(files) = e.data_transfer().and_then(|dt| dt.files()) else {
                        return;
                    };
                    if let Some(file) = files.item(0) {
                        handle_upload(file);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("drop", drop_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "dragover",
                    dragover_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "drop",
                    drop_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &mouseleave_cb,
                    &wheel_cb,
                    &touchstart_cb,
                    &touchmove_cb,
                    &touchend_cb,
                    &keydown_cb,
                    &dragover_cb,
                    &drop_cb,
                );
            }
        });
    }

    let open_picker = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| open_file_picker(&file_input_ref))
    };

    let on_file_change = {
        let handle_upload = handle_upload.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            if let Some(file) = files.item(0) {
                handle_upload(file);
            }
            // Clear so picking the same file again still fires change.
            input.set_value("");
        })
    };

    let on_zoom_in = {
        let position = position.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |_| {
            let next = position.borrow().stepped_scale(1.0);
            *position.borrow_mut() = next;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };
    let on_zoom_out = {
        let position = position.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |_| {
            let next = position.borrow().stepped_scale(-1.0);
            *position.borrow_mut() = next;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };
    let on_reset = {
        let position = position.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |_| {
            *position.borrow_mut() = ImagePosition::default();
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };

    let on_export = {
        let editor = props.editor.clone();
        let subject_res = subject_res.clone();
        let frame_res = frame_res.clone();
        let position = position.clone();
        Callback::from(move |_| {
            if editor.exporting {
                return;
            }
            let subject = subject_res.borrow();
            let Some(subject) = subject.as_ref() else {
                return;
            };
            let done = {
                let editor = editor.clone();
                Callback::from(move |error: Option<String>| {
                    if let Some(msg) = &error {
                        gloo::console::error!("export failed:", msg.clone());
                    }
                    editor.dispatch(EditorAction::ExportFinished { error });
                })
            };
            editor.dispatch(EditorAction::ExportStarted);
            export::export_composite(subject, frame_res.borrow().as_ref(), &position.borrow(), done);
        })
    };

    let status_line = props.editor.status.as_ref().map(|msg| {
        html! {
            <div style="font-size:12px; color:#f0883e; max-width:400px; text-align:center;">{ msg.clone() }</div>
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:12px;">
            <div style="position:relative;">
                <canvas
                    ref={canvas_ref.clone()}
                    width="400"
                    height="400"
                    style="display:block; width:min(90vw, 400px); height:auto; border-radius:12px; background:#fff; touch-action:none; cursor:grab;"
                ></canvas>
                <UploadOverlay
                    show={props.editor.subject.is_none()}
                    open_picker={open_picker.clone()}
                />
            </div>
            <EditorControls
                has_subject={props.editor.subject.is_some()}
                exporting={props.editor.exporting}
                on_zoom_in={on_zoom_in}
                on_zoom_out={on_zoom_out}
                on_reset={on_reset}
                on_change_photo={open_picker}
                on_export={on_export}
            />
            { status_line }
            <input
                ref={file_input_ref.clone()}
                type="file"
                accept="image/*"
                style="display:none;"
                onchange={on_file_change}
            />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let editor = use_reducer(EditorState::default);
    html! {
        <div id="root" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:16px; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <h2 style="margin:0;">{"Avatar Frame"}</h2>
            <FrameEditor editor={editor} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_image_placement;
    use crate::model::{EXPORT_SIZE, MAX_SCALE};

    // Full session walk: upload defaults, drag, pinch, wheel, then both
    // render targets agree on the composition.
    #[test]
    fn gesture_session_keeps_preview_and_export_consistent() {
        let mut position = ImagePosition::default();
        let mut gestures = GestureState::default();

        // Drag right/down by (30, 10) canvas units.
        gestures.press(200.0, 200.0, position);
        position = gestures.move_to(230.0, 210.0, position).unwrap();
        gestures.release();
        assert_eq!((position.x, position.y), (30.0, 10.0));

        // Pinch out from 120 to 180: scale 1.2 -> 1.8.
        gestures.begin_pinch(120.0, position);
        position = gestures.pinch_to(180.0, position).unwrap();
        gestures.release();
        assert!((position.scale - 1.8).abs() < 1e-9);

        // A wheel notch in, then far past the cap stays clamped.
        position = wheel_scale(position, -100.0);
        for _ in 0..50 {
            position = wheel_scale(position, -1.0);
        }
        assert_eq!(position.scale, MAX_SCALE);

        let preview = compute_image_placement(2000.0, 1000.0, &position, PREVIEW_SIZE);
        let export = compute_image_placement(2000.0, 1000.0, &position, EXPORT_SIZE);
        let ratio = EXPORT_SIZE / PREVIEW_SIZE;
        assert!((export.x - preview.x * ratio).abs() < 1e-9);
        assert!((export.y - preview.y * ratio).abs() < 1e-9);
        assert!((export.w - preview.w * ratio).abs() < 1e-9);
        assert!((export.h - preview.h * ratio).abs() < 1e-9);
        assert!((preview.w / preview.h - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fresh_upload_scenario_places_wide_photo() {
        // 2000x1000 at the post-upload default: 480x240 on the preview.
        let placement =
            compute_image_placement(2000.0, 1000.0, &ImagePosition::default(), PREVIEW_SIZE);
        assert_eq!(placement.w, 480.0);
        assert_eq!(placement.h, 240.0);
    }

    #[test]
    fn non_image_upload_is_rejected_before_any_state_change() {
        assert!(!assets::is_image_type("text/plain"));
        // The gate sits at the top of the upload path, so no resource swap,
        // position reset, or reducer dispatch can have happened.
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn composite_draws_without_resources() {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(PREVIEW_SIZE as u32);
        canvas.set_height(PREVIEW_SIZE as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        // No subject, no frame: base coat, ring, and vignette only.
        render::draw_composite(&ctx, PREVIEW_SIZE, None, None, &ImagePosition::default())
            .expect("empty composite draws");
    }
}
