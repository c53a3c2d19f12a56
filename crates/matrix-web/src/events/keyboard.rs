use crate::controls::Controls;
use matrix_core::Command;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &Controls) {
    let Some(command) = Command::for_key(&ev.code()) else {
        return;
    };
    if command == Command::TogglePause {
        // Keep Space from scrolling the page
        ev.prevent_default();
    }
    log::debug!("[keys] {} -> {:?}", ev.code(), command);
    controls.run(command);
}

pub fn wire_global_keydown(controls: Controls) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controls);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
