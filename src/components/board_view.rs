use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};
use yew::prelude::*;

use super::app::EditorHandle;
use crate::editor::EditorEvent;
use crate::render::{paint_frame, plan_frame, ImageSizes, NoImages};
use crate::state::PointerButton;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub handle: EditorHandle,
    pub dispatch: Callback<EditorEvent>,
}

/// Canvas-local CSS pixel position of a mouse event.
fn local_point(canvas: &HtmlCanvasElement, e: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (e.client_x() as f64 - rect.left(), e.client_y() as f64 - rect.top())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();

    // Mount: size the canvas, install the draw hook and the input listeners
    {
        let canvas_ref = canvas_ref.clone();
        let handle = props.handle.clone();
        let dispatch = props.dispatch.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let handle = handle.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else { return };
                    let rect = canvas.get_bounding_client_rect();
                    let images = handle.images.borrow();
                    // Flat colours until the image batch has landed
                    let sizes: &dyn ImageSizes = if images.is_empty() { &NoImages } else { &*images };
                    let frame = {
                        let ed = handle.editor.borrow();
                        plan_frame(&ed.board, &ed.view, sizes, rect.width(), rect.height())
                    };
                    paint_frame(&ctx, &frame, &images);
                })
            };
            *handle.draw.borrow_mut() = Some(draw_closure.clone());

            // Backing store follows devicePixelRatio; drawing stays in CSS pixels
            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let dispatch = dispatch.clone();
                move || {
                    let dpr = window.device_pixel_ratio().max(1.0);
                    let rect = canvas.get_bounding_client_rect();
                    canvas.set_width((rect.width() * dpr).floor().max(0.0) as u32);
                    canvas.set_height((rect.height() * dpr).floor().max(0.0) as u32);
                    if let Some(ctx) = context_2d(&canvas) {
                        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
                    }
                    dispatch.emit(EditorEvent::Resize {
                        width: rect.width(),
                        height: rect.height(),
                    });
                }
            };
            apply_canvas_size();

            let mousedown_cb = {
                let canvas_md = canvas.clone();
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(button) = PointerButton::from_code(e.button()) else { return };
                    if button != PointerButton::Primary {
                        e.prevent_default();
                    }
                    let (x, y) = local_point(&canvas_md, &e);
                    dispatch.emit(EditorEvent::PointerDown {
                        x,
                        y,
                        button,
                        shift: e.shift_key(),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .unwrap();

            // Pans keep following the mouse outside the canvas; hover does not
            let mousemove_cb = {
                let canvas_mm = canvas.clone();
                let handle = handle.clone();
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let (x, y) = local_point(&canvas_mm, &e);
                    let rect = canvas_mm.get_bounding_client_rect();
                    let inside = x >= 0.0 && y >= 0.0 && x <= rect.width() && y <= rect.height();
                    if !inside && !handle.editor.borrow().pointer.panning {
                        return;
                    }
                    dispatch.emit(EditorEvent::PointerMove { x, y });
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .unwrap();

            let mouseup_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    dispatch.emit(EditorEvent::PointerUp);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let wheel_cb = {
                let canvas_wh = canvas.clone();
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    let (x, y) = local_point(&canvas_wh, &e);
                    dispatch.emit(EditorEvent::Wheel {
                        x,
                        y,
                        delta_y: e.delta_y(),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let resize_cb = {
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            draw_closure();

            // Cleanup
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                *handle.draw.borrow_mut() = None;
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="position:absolute; inset:0; width:100%; height:100%; display:block; cursor:crosshair;"
        />
    }
}
