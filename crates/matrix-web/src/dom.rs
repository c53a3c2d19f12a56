use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to wire", element_id);
    }
}

/// Backing store follows the viewport 1:1 so pointer coordinates map
/// straight onto canvas pixels.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el
                .style()
                .set_property("display", if visible { "" } else { "none" });
        }
    }
}

/// Apply `f` to every element matching `selector`.
pub fn for_each_html(document: &web::Document, selector: &str, mut f: impl FnMut(&web::HtmlElement)) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            f(&el);
        }
    }
}
