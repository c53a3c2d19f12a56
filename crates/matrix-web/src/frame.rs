use crate::canvas::CanvasSurface;
use crate::panel;
use matrix_core::RenderLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub render_loop: Rc<RefCell<RenderLoop>>,
    pub surface: CanvasSurface,
    pub document: web::Document,
    last_published: u64,
    last_population: usize,
}

impl FrameContext {
    pub fn new(
        render_loop: Rc<RefCell<RenderLoop>>,
        surface: CanvasSurface,
        document: web::Document,
    ) -> Self {
        Self {
            render_loop,
            surface,
            document,
            last_published: 0,
            last_population: usize::MAX,
        }
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        let readout = {
            let mut lp = self.render_loop.borrow_mut();
            lp.tick(timestamp_ms, &mut self.surface);

            // Refresh the panel on a new FPS value or a population change
            let published = lp.meter().published();
            let population = lp.population();
            if published == self.last_published && population == self.last_population {
                return;
            }
            self.last_published = published;
            self.last_population = population;
            panel::Readout {
                population,
                fps: lp.current_fps(),
                load: lp.load_level(),
                elapsed_ms: lp.elapsed_since_reset(),
            }
        };
        panel::update(&self.document, &readout);
    }
}

/// Drive `frame` from requestAnimationFrame; the next frame is requested only
/// after the current one returns.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(timestamp_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
