//! Info panel, control styling and the onboarding overlay.

use crate::dom;
use matrix_core::{LoadLevel, Theme};
use web_sys as web;

const OVERLAY_ID: &str = "instructions";
const BORDERED: [&str; 4] = ["#infoPanel", "#deviceBadge", "#controls", "#instructions"];

/// Values shown in the info panel.
pub struct Readout {
    pub population: usize,
    pub fps: f64,
    pub load: LoadLevel,
    pub elapsed_ms: f64,
}

pub fn update(document: &web::Document, r: &Readout) {
    dom::set_text(document, "charsCount", &r.population.to_string());
    dom::set_text(document, "fpsValue", &format!("{}", r.fps.round() as i64));
    dom::set_text(document, "loadLevel", r.load.label());
    dom::set_text(
        document,
        "testTime",
        &format!("{:.1}s", r.elapsed_ms / 1000.0),
    );
}

pub fn set_device(document: &web::Document, profile_id: &str) {
    let label = if profile_id == "mobile" { "CPU" } else { "GPU" };
    dom::set_text(document, "deviceBadge", label);
}

pub fn set_paused(document: &web::Document, paused: bool) {
    dom::set_text(document, "pauseBtn", if paused { "RESUME" } else { "PAUSE" });
}

/// Recolor the page chrome to match `theme`.
pub fn apply_theme(document: &web::Document, theme: &Theme) {
    let bg = theme.background.css();
    let fg = theme.accent.css();
    if let Some(body) = document.body() {
        let style = body.style();
        _ = style.set_property("background-color", &bg);
        _ = style.set_property("color", &fg);
    }
    for selector in BORDERED {
        dom::for_each_html(document, selector, |el| {
            _ = el.style().set_property("border-color", &fg);
            if selector == "#controls" || selector == "#instructions" {
                _ = el.style().set_property("background", &translucent(theme, 0.9));
            }
        });
    }
    dom::for_each_html(document, ".control-btn", |btn| {
        let style = btn.style();
        _ = style.set_property("border-color", &fg);
        _ = style.set_property("color", &fg);
        _ = style.set_property("background", &translucent(theme, 0.8));
    });
    dom::set_text(document, "testMode", theme.name);
}

fn translucent(theme: &Theme, alpha: f32) -> String {
    let c = theme.background;
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, alpha)
}

#[inline]
pub fn show_overlay(document: &web::Document) {
    dom::set_visible(document, OVERLAY_ID, true);
}

#[inline]
pub fn hide_overlay(document: &web::Document) {
    dom::set_visible(document, OVERLAY_ID, false);
}
