use crate::hold::HoldTimer;
use crate::{panel, storage};
use matrix_core::{other_device_profile, Command, LoopState, RenderLoop};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every input path acts through.
#[derive(Clone)]
pub struct Controls {
    pub render_loop: Rc<RefCell<RenderLoop>>,
    pub hold: Rc<RefCell<HoldTimer>>,
    pub document: web::Document,
}

impl Controls {
    pub fn run(&self, command: Command) {
        match command {
            Command::TogglePause => {
                let state = self.render_loop.borrow_mut().toggle();
                if state == LoopState::Paused {
                    self.hold.borrow_mut().stop();
                }
                panel::set_paused(&self.document, state == LoopState::Paused);
            }
            Command::Restart => {
                let mut lp = self.render_loop.borrow_mut();
                lp.reset();
                lp.schedule_demo();
            }
            Command::AddBatch(n) => {
                self.render_loop.borrow_mut().spawn_many(n);
            }
            Command::StopHold => self.hold.borrow_mut().stop(),
            Command::NextTheme => {
                let theme = *self.render_loop.borrow_mut().next_theme();
                panel::apply_theme(&self.document, &theme);
            }
            Command::SwitchDevice => {
                let next = other_device_profile(&self.render_loop.borrow().profile().id);
                self.use_profile(next);
            }
            Command::UseProfile(id) => self.use_profile(id),
        }
    }

    /// Switch profile; on failure the current one stays and the error is logged.
    pub fn use_profile(&self, id: &str) {
        // The running interval belongs to the old profile
        self.hold.borrow_mut().stop();
        match self.render_loop.borrow_mut().set_profile(id) {
            Ok(()) => panel::set_device(&self.document, id),
            Err(e) => log::error!("[controls] {}", e),
        }
    }

    /// Dismiss onboarding and seed the first glyphs.
    pub fn start_test(&self) {
        panel::hide_overlay(&self.document);
        storage::mark_visited();
        self.render_loop.borrow_mut().schedule_demo();
    }
}
