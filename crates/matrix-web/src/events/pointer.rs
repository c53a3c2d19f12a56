use crate::controls::Controls;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates to canvas pixels.
#[inline]
fn canvas_px(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, controls: &Controls) {
    wire_click(canvas, controls);
    wire_mouse_hold(canvas, controls);
    wire_touch(canvas, controls);
}

fn listen<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(canvas: &web::HtmlCanvasElement, controls: &Controls) {
    let c = controls.clone();
    let target = canvas.clone();
    listen(canvas, "click", move |ev: web::MouseEvent| {
        let origin = canvas_px(&target, ev.client_x(), ev.client_y());
        c.render_loop.borrow_mut().spawn_one(Some(origin));
    });
}

fn wire_mouse_hold(canvas: &web::HtmlCanvasElement, controls: &Controls) {
    let c = controls.clone();
    listen(canvas, "mousedown", move |_: web::MouseEvent| {
        c.hold.borrow_mut().start();
    });
    for event in ["mouseup", "mouseleave"] {
        let c = controls.clone();
        listen(canvas, event, move |_: web::MouseEvent| {
            c.hold.borrow_mut().stop();
        });
    }
}

fn wire_touch(canvas: &web::HtmlCanvasElement, controls: &Controls) {
    let c = controls.clone();
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if c.render_loop.borrow().is_paused() {
            return;
        }
        c.hold.borrow_mut().start();
        if let Some(touch) = ev.touches().get(0) {
            let origin = canvas_px(&target, touch.client_x(), touch.client_y());
            c.render_loop.borrow_mut().spawn_one(Some(origin));
        }
    }) as Box<dyn FnMut(web::TouchEvent)>);
    // Non-passive so preventDefault suppresses the synthetic mouse events
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();

    for event in ["touchend", "touchcancel"] {
        let c = controls.clone();
        listen(canvas, event, move |_: web::TouchEvent| {
            c.hold.borrow_mut().stop();
        });
    }
}
