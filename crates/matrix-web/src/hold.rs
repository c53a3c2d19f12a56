use matrix_core::RenderLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Repeating hold-to-spawn timer backed by `setInterval`.
///
/// The interval is taken from the profile active at `start`; each firing
/// spawns the batch size of whatever profile is active then.
pub struct HoldTimer {
    render_loop: Rc<RefCell<RenderLoop>>,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl HoldTimer {
    pub fn new(render_loop: Rc<RefCell<RenderLoop>>) -> Self {
        Self {
            render_loop,
            handle: None,
            callback: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns false when paused or already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let interval_ms = {
            let lp = self.render_loop.borrow();
            if lp.is_paused() {
                return false;
            }
            lp.profile().hold.interval_ms
        };
        let Some(window) = web::window() else {
            return false;
        };

        let lp = self.render_loop.clone();
        let callback = Closure::wrap(Box::new(move || {
            let mut lp = lp.borrow_mut();
            let batch = lp.profile().hold.batch;
            lp.spawn_many(batch);
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(handle) => {
                log::debug!("[hold] every {} ms", interval_ms);
                self.handle = Some(handle);
                self.callback = Some(callback);
                true
            }
            Err(e) => {
                log::error!("[hold] setInterval failed: {:?}", e);
                false
            }
        }
    }

    /// Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
        }
        self.callback = None;
    }
}

impl Drop for HoldTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
