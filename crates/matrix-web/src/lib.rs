#![cfg(target_arch = "wasm32")]
use matrix_core::{Command, RenderLoop, THEMES};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod controls;
mod dom;
mod events;
mod frame;
mod hold;
mod panel;
mod storage;

use controls::Controls;

const CANVAS_ID: &str = "matrixCanvas";
const MOBILE_MAX_WIDTH: f64 = 768.0;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_viewport(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn detect_device(window: &web::Window) -> &'static str {
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    let mobile_ua = ["Mobi", "Android", "iPhone", "iPad"]
        .iter()
        .any(|needle| ua.contains(needle));
    let narrow = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .is_some_and(|w| w <= MOBILE_MAX_WIDTH);
    if mobile_ua || (narrow && navigator.max_touch_points() > 0) {
        "mobile"
    } else {
        "desktop"
    }
}

fn seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (noise << 32) ^ instant::now() as u64
}

fn wire_buttons(controls: &Controls) {
    let doc = &controls.document;
    let buttons: [(&str, Command); 4] = [
        ("pauseBtn", Command::TogglePause),
        ("resetBtn", Command::Restart),
        ("themeBtn", Command::NextTheme),
        ("deviceBtn", Command::SwitchDevice),
    ];
    for (id, command) in buttons {
        let c = controls.clone();
        dom::add_click_listener(doc, id, move || c.run(command));
    }

    let c = controls.clone();
    dom::add_click_listener(doc, "addBtn", move || {
        let batch = c.render_loop.borrow().profile().hold.batch;
        c.run(Command::AddBatch(batch));
    });
    for id in ["desktop", "mobile", "rain"] {
        let c = controls.clone();
        dom::add_click_listener(doc, &format!("{}Btn", id), move || c.use_profile(id));
    }
    let c = controls.clone();
    dom::add_click_listener(doc, "startBtn", move || c.start_test());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("matrix-fps starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    let surface = canvas::CanvasSurface::new(canvas.clone())?;

    let device = detect_device(&window);
    let render_loop = Rc::new(RefCell::new(RenderLoop::with_builtin_profiles(
        device,
        seed(),
    )?));
    log::info!("[init] device profile `{}`", device);

    let controls = Controls {
        render_loop: render_loop.clone(),
        hold: Rc::new(RefCell::new(hold::HoldTimer::new(render_loop.clone()))),
        document: document.clone(),
    };

    panel::apply_theme(&document, &THEMES[0]);
    panel::set_device(&document, device);
    panel::set_paused(&document, false);
    if storage::has_visited() {
        panel::hide_overlay(&document);
        render_loop.borrow_mut().schedule_demo();
    } else {
        panel::show_overlay(&document);
    }

    wire_buttons(&controls);
    events::wire_global_keydown(controls.clone());
    events::wire_input_handlers(surface.canvas(), &controls);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        render_loop,
        surface,
        document,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
